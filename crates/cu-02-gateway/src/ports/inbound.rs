//! Inbound Ports (Driving Ports / API)

use async_trait::async_trait;
use shared_http::HttpResponse;
use shared_types::{Block, Module, Process};

use crate::domain::errors::GatewayError;
use crate::domain::graphql::TransactionNode;

/// Gateway operations used by the hydrator and the process loader.
///
/// All operations are single-item; each call is one round trip except
/// `load_blocks_meta`, which follows the cursor until exhausted.
#[async_trait]
pub trait GatewayApi: Send + Sync {
    /// Metadata node of transaction `id`.
    async fn load_transaction_meta(&self, id: &str) -> Result<TransactionNode, GatewayError>;

    /// Raw response for the bytes of transaction `id`, untransformed.
    /// Non-2xx statuses are returned, not rejected; only transport failures error.
    async fn load_transaction_data(&self, id: &str) -> Result<HttpResponse, GatewayError>;

    /// Process record for `id`. Fails unless tagged `Type=Process`.
    async fn load_process(&self, id: &str) -> Result<Process, GatewayError>;

    /// Module record for `id`. Fails unless tagged `Type=Module`.
    async fn load_module(&self, id: &str) -> Result<Module, GatewayError>;

    /// Blocks with `min_height <= height <= max_height`, ascending.
    async fn load_blocks_meta(
        &self,
        min_height: u64,
        max_height: u64,
    ) -> Result<Vec<Block>, GatewayError>;
}
