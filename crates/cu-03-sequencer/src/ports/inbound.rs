//! Inbound Ports (Driving Ports / API)

use async_trait::async_trait;
use shared_types::Interaction;

use crate::domain::errors::SequencerError;
use crate::domain::wire::LoadInteractionsRequest;

/// Primary API of the sequencer client.
#[async_trait]
pub trait SequencerApi: Send + Sync {
    /// Every interaction addressed to `request.process_id` within the
    /// bounds, across all pages, in ascending sort-key order.
    async fn load_interactions(
        &self,
        request: &LoadInteractionsRequest,
    ) -> Result<Vec<Interaction>, SequencerError>;
}
