//! Error types for the gateway client

use shared_http::TransportError;
use thiserror::Error;

/// All errors surfaced by gateway operations.
///
/// Every variant names the operation and the id (or range) involved.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Round trip failed before a response arrived.
    #[error("{operation} {id}: transport failure: {source}")]
    Transport {
        operation: &'static str,
        id: String,
        #[source]
        source: TransportError,
    },

    /// Gateway answered with a non-2xx status.
    #[error("{operation} {id}: gateway returned HTTP {status}")]
    UpstreamStatus {
        operation: &'static str,
        id: String,
        status: u16,
    },

    /// Response body does not match the expected envelope.
    #[error("{operation} {id}: unexpected response shape: {reason}")]
    Shape {
        operation: &'static str,
        id: String,
        reason: String,
    },

    /// GraphQL `errors` array was non-empty.
    #[error("{operation} {id}: GraphQL error: {message}")]
    Graphql {
        operation: &'static str,
        id: String,
        message: String,
    },

    /// Query succeeded but matched no transaction.
    #[error("Transaction not found: {0}")]
    NotFound(String),

    /// Transaction exists but is not the expected record type.
    #[error("Transaction {id} is not a {expected} (Type = {found:?})")]
    WrongType {
        id: String,
        expected: &'static str,
        found: Option<String>,
    },

    /// Cursor pagination did not terminate within the configured bound.
    #[error("Block pagination exceeded {max_pages} pages")]
    PaginationLimit { max_pages: usize },
}
