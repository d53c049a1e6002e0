//! Update endpoint
//!
//! `POST /update` with form fields `id`, `name`, `location`, `belongs_to`.
//! Full-record replace; an id that matches nothing is a silent success.

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
pub struct UpdateForm {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub belongs_to: String,
}

pub async fn handle_update(
    State(state): State<AppState>,
    form: Result<Form<UpdateForm>, FormRejection>,
) -> (StatusCode, Json<Value>) {
    let result = match form {
        Ok(Form(form)) => execute_update(&state.config, form).await,
        Err(rejection) => Err(form_error(rejection)),
    };

    match result {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({"message": "Item updated successfully"})),
        ),
        Err(e) => {
            error!(code = e.error_code(), "Error in update_item: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "Failed to update item"})),
            )
        }
    }
}

/// Returns the number of rows touched (zero or one).
pub async fn execute_update(
    config: &crate::config::Config,
    form: UpdateForm,
) -> Result<usize, AppError> {
    let name = normalize(&form.name);

    let affected = with_store(config, move |store| {
        store.update_item(form.id, &name, &form.location, &form.belongs_to)
    })
    .await?;

    debug!("Updated item {} ({} rows)", form.id, affected);
    Ok(affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::seeded_config;
    use crate::store::Store;

    #[tokio::test]
    async fn test_update_changes_only_target() {
        let dir = tempfile::tempdir().unwrap();
        let config = seeded_config(dir.path());
        let laptop_id = Store::open(&config.db_path)
            .unwrap()
            .find_by_name("laptop")
            .unwrap()
            .unwrap()
            .id;

        let affected = execute_update(
            &config,
            UpdateForm {
                id: laptop_id,
                name: "Laptop".to_string(),
                location: "living room table".to_string(),
                belongs_to: "Bob".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(affected, 1);

        let store = Store::open(&config.db_path).unwrap();
        let laptop = store.find_by_name("laptop").unwrap().unwrap();
        assert_eq!(laptop.location, "living room table");
        let passport = store.find_by_name("passport").unwrap().unwrap();
        assert_eq!(passport.location, "black backpack side pocket");
    }

    #[tokio::test]
    async fn test_update_missing_id_succeeds_silently() {
        let dir = tempfile::tempdir().unwrap();
        let config = seeded_config(dir.path());

        let affected = execute_update(
            &config,
            UpdateForm {
                id: 9999,
                name: "ghost".to_string(),
                location: "nowhere".to_string(),
                belongs_to: "nobody".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(affected, 0);
    }
}
