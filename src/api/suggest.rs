//! Suggest endpoint
//!
//! `GET /suggest?query=` — case-insensitive prefix match over stored names,
//! returning raw name strings for autocomplete. On failure this endpoint
//! degrades to an empty array rather than a message object.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::error;

use super::{with_store, AppState};
use crate::error::AppError;
use crate::search::normalize;

/// Cap on returned suggestions. The scan is otherwise unbounded.
pub const SUGGEST_LIMIT: usize = 25;

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    pub query: String,
}

pub async fn handle_suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestQuery>,
) -> (StatusCode, Json<Vec<String>>) {
    match execute_suggest(&state.config, &params.query).await {
        Ok(names) => (StatusCode::OK, Json(names)),
        Err(e) => {
            error!(code = e.error_code(), "Error in suggest: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Vec::new()))
        }
    }
}

pub async fn execute_suggest(
    config: &crate::config::Config,
    query: &str,
) -> Result<Vec<String>, AppError> {
    let prefix = normalize(query);
    with_store(config, move |store| {
        store.prefix_suggest(&prefix, SUGGEST_LIMIT)
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{seeded_config, test_config};
    use crate::store::Store;

    #[tokio::test]
    async fn test_suggest_prefix_only() {
        let dir = tempfile::tempdir().unwrap();
        let config = seeded_config(dir.path());

        let names = execute_suggest(&config, "pa").await.unwrap();
        assert_eq!(names, vec!["passport".to_string()]);

        // Substrings that are not prefixes do not match
        assert!(execute_suggest(&config, "charger").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_suggest_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let config = seeded_config(dir.path());

        let names = execute_suggest(&config, "LAP").await.unwrap();
        assert_eq!(names, vec!["laptop".to_string()]);
    }

    #[tokio::test]
    async fn test_suggest_empty_query_lists_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let config = seeded_config(dir.path());

        let names = execute_suggest(&config, "").await.unwrap();
        assert_eq!(names.len(), 5);
    }

    #[tokio::test]
    async fn test_suggest_caps_results() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let store = Store::open(&config.db_path).unwrap();
        for i in 0..(SUGGEST_LIMIT + 10) {
            store
                .add_item(&format!("pen {}", i), "drawer", "Mike")
                .unwrap();
        }
        drop(store);

        let names = execute_suggest(&config, "pen").await.unwrap();
        assert_eq!(names.len(), SUGGEST_LIMIT);
    }
}
