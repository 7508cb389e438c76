//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Base URL cannot address the API
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected payload or id conflict (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Server-side failure (5xx)
    #[error("Server error: {0}")]
    Server(String),

    /// Import file is not a JSON array of products
    #[error("Invalid import file: {0}")]
    InvalidImport(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
