//! Error types for the whereabouts server
//!
//! Every handler failure is one of these kinds. The HTTP rim flattens them
//! all to a generic per-endpoint message with status 500, but the kinds stay
//! distinct for logs and tests.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Short machine-readable code, used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Store(_) => "store_error",
            AppError::NotFound(_) => "not_found",
            AppError::Internal(_) => "internal_error",
        }
    }
}

/// Blocking store work runs on the tokio blocking pool; a lost worker
/// surfaces as an internal error rather than a panic in the handler.
impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(err.to_string())
    }
}
