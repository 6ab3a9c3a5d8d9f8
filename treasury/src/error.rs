//! Treasury metrics error types

use thiserror::Error;

/// Errors reading subgraph metric dumps
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Unknown chart preset: {0}")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, MetricsError>;
