//! Error types for the market crate

use thiserror::Error;

/// Invalid user-supplied selections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarketError {
    #[error("unknown category '{0}' (expected services, buysell or other)")]
    UnknownCategory(String),

    #[error("unknown type filter '{filter}' for category {category}")]
    UnknownTypeFilter { category: String, filter: String },

    #[error("unknown theme '{0}' (expected light or dark)")]
    UnknownTheme(String),

    #[error("invalid api base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Failures talking to the marketplace API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{path} answered with status {status}")]
    Status { path: String, status: u16 },

    #[error("could not decode response from {path}: {reason}")]
    Decode { path: String, reason: String },
}
