//! Errors surfaced by the runtime.

use cu_02_gateway::GatewayError;
use cu_03_sequencer::SequencerError;
use cu_05_process_cache::CacheError;
use shared_http::TransportError;
use thiserror::Error;

use crate::container::ConfigError;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP transport: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Sequencer(#[from] SequencerError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}
