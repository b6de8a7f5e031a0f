//! [`TransactionLoader`] backed by the gateway client.

use std::sync::Arc;

use async_trait::async_trait;
use cu_02_gateway::{GatewayApi, GatewayError, TransactionNode};
use shared_http::HttpResponse;

use crate::ports::outbound::TransactionLoader;

pub struct GatewayTransactionLoader {
    gateway: Arc<dyn GatewayApi>,
}

impl GatewayTransactionLoader {
    pub fn new(gateway: Arc<dyn GatewayApi>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl TransactionLoader for GatewayTransactionLoader {
    async fn load_transaction_meta(&self, id: &str) -> Result<TransactionNode, GatewayError> {
        self.gateway.load_transaction_meta(id).await
    }

    async fn load_transaction_data(&self, id: &str) -> Result<HttpResponse, GatewayError> {
        self.gateway.load_transaction_data(id).await
    }
}
