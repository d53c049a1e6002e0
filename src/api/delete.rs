//! Delete endpoint
//!
//! `POST /delete` with form field `id`. Deleting an id that matches nothing
//! is a silent success.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error};

use super::{form_error, with_store, AppState};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub id: i64,
}

pub async fn handle_delete(
    State(state): State<AppState>,
    form: Result<Form<DeleteForm>, FormRejection>,
) -> (StatusCode, Json<Value>) {
    let result = match form {
        Ok(Form(form)) => execute_delete(&state.config, form.id).await,
        Err(rejection) => Err(form_error(rejection)),
    };

    match result {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({"message": "Item deleted successfully"})),
        ),
        Err(e) => {
            error!(code = e.error_code(), "Error in delete_item: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "Failed to delete item"})),
            )
        }
    }
}

/// Returns the number of rows removed (zero or one).
pub async fn execute_delete(
    config: &crate::config::Config,
    id: i64,
) -> Result<usize, AppError> {
    let affected = with_store(config, move |store| store.delete_item(id)).await?;
    debug!("Deleted item {} ({} rows)", id, affected);
    Ok(affected)
}
