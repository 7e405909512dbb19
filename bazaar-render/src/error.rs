//! Error types for rendering

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("{0}")]
    NotSupported(String),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
