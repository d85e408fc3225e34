use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The application core sent something the shell does not understand.
    #[error("Protocol violation: {0}")]
    Protocol(String),

    #[error("Application core unavailable: {0}")]
    CoreUnavailable(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Errors that end the process rather than a single pipeline.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Protocol(_) | Self::CoreUnavailable(_))
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
