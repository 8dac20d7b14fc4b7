// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoaderError>;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Solr returned {status}: {message}")]
    Solr { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Admin tool '{command}' not found, ensure Solr is installed and on PATH")]
    AdminToolNotFound { command: String },

    #[error("Permission denied running '{command}', try elevated privileges")]
    AdminPermissionDenied { command: String },

    #[error("Creating collection '{collection}' failed: {status}")]
    AdminCommandFailed { collection: String, status: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for LoaderError {
    fn from(err: serde_json::Error) -> Self {
        LoaderError::Serialization(err.to_string())
    }
}
