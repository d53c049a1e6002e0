//! Search endpoint
//!
//! `POST /search` with form field `search_term`. Fuzzy-ranks the catalog's
//! names and resolves the winners to full records, or falls back to a
//! substring scan when nothing scores confidently.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info};

use super::{form_error, with_store, AppState};
use crate::error::AppError;
use crate::search::normalize;
use crate::search::ranking::{rank, RankOutcome, FALLBACK_SCORE};

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub search_term: String,
}

/// One search hit: the full record plus its score. Ranked hits carry their
/// fuzzy score; fallback hits all carry the flat 100. The two are not
/// comparable and that asymmetry is kept as-is.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResult {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub belongs_to: String,
    pub score: f64,
}

pub async fn handle_search(
    State(state): State<AppState>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> (StatusCode, Json<Value>) {
    let result = match form {
        Ok(Form(form)) => execute_search(&state.config, &form.search_term).await,
        Err(rejection) => Err(form_error(rejection)),
    };

    match result {
        Ok(results) if results.is_empty() => (
            StatusCode::OK,
            Json(json!({"message": "No items found matching your search"})),
        ),
        Ok(results) => (StatusCode::OK, Json(json!({"results": results}))),
        Err(e) => {
            error!(code = e.error_code(), "Error in search: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "An error occurred during search"})),
            )
        }
    }
}

/// Run a search against the catalog. The query is normalized the same way
/// names were at write time.
pub async fn execute_search(
    config: &crate::config::Config,
    search_term: &str,
) -> Result<Vec<SearchResult>, AppError> {
    let term = normalize(search_term);
    info!("Search term received: {}", term);

    with_store(config, move |store| {
        let names = store.all_names()?;

        match rank(&term, &names) {
            RankOutcome::Ranked(ranked) => ranked
                .into_iter()
                .map(|r| {
                    let item = store.find_by_name(&r.name)?.ok_or_else(|| {
                        AppError::NotFound(format!("item named {:?} disappeared", r.name))
                    })?;
                    Ok(SearchResult {
                        id: item.id,
                        name: item.name,
                        location: item.location,
                        belongs_to: item.belongs_to,
                        score: r.score,
                    })
                })
                .collect(),
            RankOutcome::Fallback => {
                let items = store.substring_search(&term)?;
                Ok(items
                    .into_iter()
                    .map(|item| SearchResult {
                        id: item.id,
                        name: item.name,
                        location: item.location,
                        belongs_to: item.belongs_to,
                        score: FALLBACK_SCORE,
                    })
                    .collect())
            }
        }
    })
    .await
}
