//! HTTP surface
//!
//! One module per endpoint, each split into an axum `handle_*` wrapper and an
//! `execute_*` function returning `Result<_, AppError>`. The wrappers own the
//! flatten-to-generic-message policy; the execute functions are what the
//! tests drive.

pub mod add;
pub mod delete;
pub mod search;
pub mod suggest;
pub mod update;

use anyhow::Result;
use axum::extract::rejection::FormRejection;
use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::store::Store;

/// Shared request context: just the startup configuration. There is no pool
/// and no cached connection; every request opens its own store.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

/// Build the application router.
pub fn router(config: Config) -> Router {
    Router::new()
        .route("/search", post(search::handle_search))
        .route("/add", post(add::handle_add))
        .route("/update", post(update::handle_update))
        .route("/delete", post(delete::handle_delete))
        .route("/suggest", get(suggest::handle_suggest))
        .with_state(AppState { config })
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: Config) -> Result<()> {
    let bind = config.bind;
    let app = router(config);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Listening on http://{}", bind);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Run store work on the blocking pool with a connection scoped to this
/// request: opened inside the closure, closed on drop on every exit path.
pub(crate) async fn with_store<T, F>(config: &Config, work: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&Store) -> Result<T, AppError> + Send + 'static,
{
    let db_path = config.db_path.clone();
    tokio::task::spawn_blocking(move || {
        let store = Store::open(&db_path)?;
        work(&store)
    })
    .await?
}

/// Missing or malformed form fields are invalid input like any other.
pub(crate) fn form_error(rejection: FormRejection) -> AppError {
    AppError::InvalidInput(rejection.body_text())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::path::Path;

    /// Config pointing at a throwaway on-disk database. In-memory SQLite
    /// would vanish between the per-request connections, so endpoint tests
    /// use a tempdir-backed file instead.
    pub fn test_config(dir: &Path) -> Config {
        Config {
            bind: "127.0.0.1:0".parse().unwrap(),
            db_path: dir.join("items.db"),
        }
    }

    pub fn seeded_config(dir: &Path) -> Config {
        let config = test_config(dir);
        let store = Store::open(&config.db_path).unwrap();
        store.seed_sample_data().unwrap();
        config
    }
}
