//! Error types for the finance client

use crate::endpoint::Action;

/// Errors that can occur while resolving or calling finance API endpoints
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Action {0} requires a path parameter")]
    MissingParameter(Action),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for finance client operations
pub type Result<T> = std::result::Result<T, ClientError>;
