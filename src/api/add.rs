//! Add endpoint
//!
//! `POST /add` with form fields `name`, `location`, `belongs_to`. Names are
//! normalized at write time so search always compares like with like.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error};

use super::{form_error, with_store, AppState};
use crate::error::AppError;
use crate::search::normalize;

#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub name: String,
    pub location: String,
    pub belongs_to: String,
}

pub async fn handle_add(
    State(state): State<AppState>,
    form: Result<Form<AddForm>, FormRejection>,
) -> (StatusCode, Json<Value>) {
    let result = match form {
        Ok(Form(form)) => execute_add(&state.config, form).await,
        Err(rejection) => Err(form_error(rejection)),
    };

    match result {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({"message": "Item added successfully"})),
        ),
        Err(e) => {
            error!(code = e.error_code(), "Error in add_item: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "Failed to add item"})),
            )
        }
    }
}

pub async fn execute_add(
    config: &crate::config::Config,
    form: AddForm,
) -> Result<i64, AppError> {
    let name = normalize(&form.name);

    let id = with_store(config, move |store| {
        store.add_item(&name, &form.location, &form.belongs_to)
    })
    .await?;

    debug!("Added item {}", id);
    Ok(id)
}
