//! Error types for article service calls.

use thiserror::Error;

/// Errors that can occur when calling the remote article service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Failed to reach the service at all.
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Call exceeded the configured request timeout.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Service responded with a non-success status.
    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// Response body did not match the article contract.
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    /// Endpoint URL could not be built from the configured base.
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),
}

impl ServiceError {
    /// Short tag for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Connection { .. } => "connection",
            ServiceError::Timeout { .. } => "timeout",
            ServiceError::Upstream { .. } => "upstream",
            ServiceError::Decode { .. } => "decode",
            ServiceError::InvalidUrl(_) => "invalid_url",
        }
    }
}
