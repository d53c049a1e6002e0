//! Server configuration
//!
//! Explicit configuration built once at startup and passed down, instead of
//! process-global state.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cli::ServeArgs;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind: SocketAddr,
    /// Path to the SQLite database file
    pub db_path: PathBuf,
}

impl Config {
    pub fn from_args(args: &ServeArgs) -> Result<Self, AppError> {
        let bind: SocketAddr = args
            .bind
            .parse()
            .map_err(|_| AppError::InvalidInput(format!("Invalid bind address: {}", args.bind)))?;

        Ok(Self {
            bind,
            db_path: PathBuf::from(&args.db),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_args() {
        let args = ServeArgs {
            bind: "0.0.0.0:8080".to_string(),
            db: "catalog.db".to_string(),
        };
        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.db_path, PathBuf::from("catalog.db"));
    }

    #[test]
    fn test_config_rejects_bad_bind() {
        let args = ServeArgs {
            bind: "not-an-address".to_string(),
            db: "catalog.db".to_string(),
        };
        assert!(Config::from_args(&args).is_err());
    }
}
