//! Error types for biasprobe.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, Error>;
