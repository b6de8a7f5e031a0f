//! Configuration for the gateway client

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the gateway, without trailing slash.
    pub gateway_url: String,
    /// Blocks requested per GraphQL page.
    pub blocks_page_size: u32,
    /// Upper bound on block pages followed in one load.
    pub max_block_pages: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            gateway_url: "https://arweave.net".to_string(),
            blocks_page_size: 100,
            max_block_pages: 10_000,
        }
    }
}

impl GatewayConfig {
    pub fn with_url(gateway_url: impl Into<String>) -> Self {
        Self {
            gateway_url: gateway_url.into(),
            ..Default::default()
        }
    }

    fn base(&self) -> &str {
        self.gateway_url.trim_end_matches('/')
    }

    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.base())
    }

    pub fn data_url(&self, id: &str) -> String {
        format!("{}/{}", self.base(), id)
    }
}
