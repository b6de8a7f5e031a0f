//! Gateway Client Service
//!
//! Implements [`GatewayApi`] over an injected [`HttpTransport`].

use std::sync::Arc;

use async_trait::async_trait;
use shared_http::{HttpRequest, HttpResponse, HttpTransport};
use shared_types::{find_tag, Block, Module, Process, TAG_TYPE, TYPE_MODULE, TYPE_PROCESS};
use tracing::{debug, info, warn};

use crate::config::GatewayConfig;
use crate::domain::errors::GatewayError;
use crate::domain::graphql::{
    blocks_request, decode_envelope, transactions_request, BlocksData, TransactionNode,
    TransactionsData,
};
use crate::ports::inbound::GatewayApi;

const OP_META: &str = "load_transaction_meta";
const OP_DATA: &str = "load_transaction_data";
const OP_BLOCKS: &str = "load_blocks_meta";

/// Gateway client.
///
/// Holds no per-request state; clone the `Arc` around it freely.
pub struct GatewayClient {
    config: GatewayConfig,
    transport: Arc<dyn HttpTransport>,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Send `request`, mapping transport failures. Any status is returned as is.
    async fn send(
        &self,
        request: HttpRequest,
        operation: &'static str,
        id: &str,
    ) -> Result<HttpResponse, GatewayError> {
        self.transport.send(request).await.map_err(|source| {
            warn!(operation, id, error = %source, "Gateway request failed");
            GatewayError::Transport {
                operation,
                id: id.to_string(),
                source,
            }
        })
    }

    /// Send `request`, mapping transport failures and non-2xx statuses.
    async fn round_trip(
        &self,
        request: HttpRequest,
        operation: &'static str,
        id: &str,
    ) -> Result<HttpResponse, GatewayError> {
        let response = self.send(request, operation, id).await?;

        if !response.is_success() {
            warn!(operation, id, status = response.status, "Gateway returned error status");
            return Err(GatewayError::UpstreamStatus {
                operation,
                id: id.to_string(),
                status: response.status,
            });
        }

        Ok(response)
    }

    fn graphql_request(
        &self,
        body: &serde_json::Value,
        operation: &'static str,
        id: &str,
    ) -> Result<HttpRequest, GatewayError> {
        HttpRequest::post_json(self.config.graphql_url(), body).map_err(|source| {
            GatewayError::Transport {
                operation,
                id: id.to_string(),
                source,
            }
        })
    }

    /// Check a record's `Type` tag value against `expected`.
    fn expect_type(
        id: &str,
        found: Option<&str>,
        expected: &'static str,
    ) -> Result<(), GatewayError> {
        match found {
            Some(found) if found == expected => Ok(()),
            found => Err(GatewayError::WrongType {
                id: id.to_string(),
                expected,
                found: found.map(str::to_string),
            }),
        }
    }

    fn missing(operation: &'static str, id: &str, field: &str) -> GatewayError {
        GatewayError::Shape {
            operation,
            id: id.to_string(),
            reason: format!("missing {field}"),
        }
    }
}

#[async_trait]
impl GatewayApi for GatewayClient {
    async fn load_transaction_meta(&self, id: &str) -> Result<TransactionNode, GatewayError> {
        debug!(id, "Loading transaction metadata");

        let request = self.graphql_request(&transactions_request(&[id]), OP_META, id)?;
        let response = self.round_trip(request, OP_META, id).await?;
        let data: TransactionsData = decode_envelope(&response.body, OP_META, id)?;

        data.transactions
            .edges
            .into_iter()
            .map(|edge| edge.node)
            .find(|node| node.id == id)
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))
    }

    async fn load_transaction_data(&self, id: &str) -> Result<HttpResponse, GatewayError> {
        debug!(id, "Loading transaction data");

        let request = HttpRequest::get(self.config.data_url(id));
        self.send(request, OP_DATA, id).await
    }

    async fn load_process(&self, id: &str) -> Result<Process, GatewayError> {
        let node = self.load_transaction_meta(id).await?;

        let owner = node
            .owner
            .ok_or_else(|| Self::missing("load_process", id, "owner"))?;
        let block = node
            .block
            .ok_or_else(|| Self::missing("load_process", id, "block"))?;

        let process = Process {
            id: node.id,
            signature: node.signature,
            data: None,
            anchor: node.anchor,
            owner: owner.address,
            tags: node.tags,
            block,
        };
        Self::expect_type(&process.id, process.record_type(), TYPE_PROCESS)?;

        info!(
            process_id = id,
            block_height = process.block.height,
            "Loaded process metadata"
        );
        Ok(process)
    }

    async fn load_module(&self, id: &str) -> Result<Module, GatewayError> {
        let node = self.load_transaction_meta(id).await?;
        Self::expect_type(&node.id, find_tag(&node.tags, TAG_TYPE), TYPE_MODULE)?;

        let owner = node
            .owner
            .ok_or_else(|| Self::missing("load_module", id, "owner"))?;

        let module = Module {
            id: node.id,
            owner: owner.address,
            tags: node.tags,
        };

        let missing = module.missing_protocol_tags();
        if !missing.is_empty() {
            warn!(module_id = id, ?missing, "Module lacks protocol tags");
        }
        info!(module_id = id, "Loaded module metadata");

        Ok(module)
    }

    async fn load_blocks_meta(
        &self,
        min_height: u64,
        max_height: u64,
    ) -> Result<Vec<Block>, GatewayError> {
        let range = format!("{min_height}..={max_height}");
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            if pages >= self.config.max_block_pages {
                return Err(GatewayError::PaginationLimit {
                    max_pages: self.config.max_block_pages,
                });
            }
            pages += 1;

            let body = blocks_request(
                min_height,
                max_height,
                self.config.blocks_page_size,
                cursor.as_deref(),
            );
            let request = self.graphql_request(&body, OP_BLOCKS, &range)?;
            let response = self.round_trip(request, OP_BLOCKS, &range).await?;
            let data: BlocksData = decode_envelope(&response.body, OP_BLOCKS, &range)?;

            let has_next = data
                .blocks
                .page_info
                .as_ref()
                .map(|info| info.has_next_page)
                .unwrap_or(false);
            let last_cursor = data.blocks.edges.last().and_then(|e| e.cursor.clone());

            debug!(range = %range, page = pages, count = data.blocks.edges.len(), has_next, "Loaded block page");
            blocks.extend(data.blocks.edges.into_iter().map(|edge| edge.node));

            if !has_next {
                break;
            }
            cursor = Some(last_cursor.ok_or_else(|| Self::missing(OP_BLOCKS, &range, "cursor"))?);
        }

        blocks.sort_by_key(|block| block.height);
        info!(range = %range, pages, count = blocks.len(), "Loaded block metadata");
        Ok(blocks)
    }
}
