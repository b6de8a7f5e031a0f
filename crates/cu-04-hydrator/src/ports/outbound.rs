//! Outbound Ports (Driven Ports / SPI)

use async_trait::async_trait;
use cu_02_gateway::{GatewayError, TransactionNode};
use shared_http::HttpResponse;

/// Source of referenced transactions.
#[async_trait]
pub trait TransactionLoader: Send + Sync {
    /// Metadata of transaction `id` (owner still in `{address}` form).
    async fn load_transaction_meta(&self, id: &str) -> Result<TransactionNode, GatewayError>;

    /// Raw bytes of transaction `id`.
    async fn load_transaction_data(&self, id: &str) -> Result<HttpResponse, GatewayError>;
}
