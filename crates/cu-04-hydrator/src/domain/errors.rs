//! Error types for the message hydrator

use cu_02_gateway::GatewayError;
use thiserror::Error;

/// Failure to hydrate one envelope. The stream yields it in that
/// envelope's position.
#[derive(Debug, Error)]
pub enum HydrationError {
    /// Metadata of the referenced transaction could not be loaded.
    #[error("Failed to load metadata of {reference} for message {message_id:?}: {source}")]
    Meta {
        message_id: Option<String>,
        reference: String,
        #[source]
        source: GatewayError,
    },

    /// Bytes of the referenced transaction could not be loaded.
    #[error("Failed to load data of {reference} for message {message_id:?}: {source}")]
    Data {
        message_id: Option<String>,
        reference: String,
        #[source]
        source: GatewayError,
    },

    /// Data response carried a non-2xx status.
    #[error("Data of {reference} returned HTTP {status}")]
    DataStatus { reference: String, status: u16 },

    /// Referenced transaction has no owner.
    #[error("Referenced transaction {reference} has no owner")]
    MissingOwner { reference: String },

    /// `Load` tag present with an empty value.
    #[error("Message {message_id:?} has an empty Load tag")]
    EmptyReference { message_id: Option<String> },
}
