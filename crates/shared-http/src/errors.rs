//! Transport error types.

use thiserror::Error;

/// Failures below the HTTP status line: the request never produced a
/// response, or the request itself could not be built.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Upstream unreachable.
    #[error("Connection failed: {url}: {reason}")]
    Connection { url: String, reason: String },

    /// Round trip exceeded the configured timeout.
    #[error("Request timed out: {url}")]
    Timeout { url: String },

    /// Request body could not be encoded.
    #[error("Failed to encode request body: {0}")]
    Encode(String),

    /// Response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// Any other client failure.
    #[error("HTTP client error: {0}")]
    Client(String),
}
