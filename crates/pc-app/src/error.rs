//! Error types for the pc-app service layer.

use std::path::PathBuf;

/// Application error shared by every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Reference table error: {0}")]
    Table(#[from] pc_table::TableError),

    #[error("Table configuration error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Failed to read table file: {path}")]
    TableFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Malformed request body: {0}")]
    BadRequest(serde_json::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True for errors caused by the caller's request rather than by setup.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::InvalidInput(_) | AppError::BadRequest(_))
    }
}

/// Result type for pc-app operations.
pub type AppResult<T> = Result<T, AppError>;
