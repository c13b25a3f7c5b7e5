//! Error types for catalog search operations.

use thiserror::Error;

/// Errors that can occur when searching the remote catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// HTTP request failed (unreachable host, timeout, connection reset).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Server answered with a non-2xx status code.
    #[error("HTTP status {0}")]
    Status(u16),

    /// JSON deserialization of the response body failed.
    #[error("Failed to parse response: {0}")]
    Json(String),

    /// The configured endpoint is not a valid URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// The request was cancelled before completion.
    ///
    /// Cancellation is an explicit kind, never inferred from message text.
    /// Callers discard these outcomes without surfacing anything to the user.
    #[error("Request cancelled")]
    Cancelled,
}

impl CatalogError {
    /// Returns true if this error represents a cancelled request.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CatalogError::Cancelled)
    }
}
