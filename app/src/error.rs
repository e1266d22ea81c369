//! Application error handling
//!
//! Every fallible operation in the app crate returns [`AppResult`]. Storage
//! read failures never surface here; they are logged and replaced by
//! defaults inside the store.

use fitness_tracker_shared::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error came from user input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::NotFound(_) | AppError::UnknownScreen(_)
        )
    }
}

/// Result type alias for app operations
pub type AppResult<T> = Result<T, AppError>;
