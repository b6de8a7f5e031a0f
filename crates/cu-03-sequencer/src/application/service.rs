//! Sequencer Client Service
//!
//! Implements [`SequencerApi`] over an injected [`HttpTransport`].

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use cu_01_sort_key::{map_bounds, pad_block_height, SortKeyBounds};
use shared_http::{HttpRequest, HttpTransport};
use shared_types::Interaction;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::application::decode::decode_interaction;
use crate::config::SequencerConfig;
use crate::domain::errors::SequencerError;
use crate::domain::wire::{LoadInteractionsRequest, SequencerPage};
use crate::ports::inbound::SequencerApi;

/// Sequencer client.
///
/// Orchestrates one range load:
/// 1. Normalize bounds
/// 2. Fetch pages until the sequencer reports the last one
/// 3. Decode every interaction, failing the load on the first bad one
/// 4. Prepend each decoded interaction so the result is ascending
pub struct SequencerClient {
    config: SequencerConfig,
    transport: Arc<dyn HttpTransport>,
}

impl SequencerClient {
    pub fn new(config: SequencerConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    fn page_request(&self, process_id: &str, bounds: &SortKeyBounds, page: u64) -> HttpRequest {
        let mut request =
            HttpRequest::get(self.config.interactions_url()).with_query("contractId", process_id);
        if let Some(from) = bounds.from.as_deref().filter(|s| !s.is_empty()) {
            request = request.with_query("from", from);
        }
        if let Some(to) = bounds.to.as_deref().filter(|s| !s.is_empty()) {
            request = request.with_query("to", to);
        }
        request
            .with_query("page", page.to_string())
            .with_query("limit", self.config.page_limit.to_string())
    }

    async fn fetch_page(
        &self,
        process_id: &str,
        bounds: &SortKeyBounds,
        page: u64,
    ) -> Result<SequencerPage, SequencerError> {
        let response = self
            .transport
            .send(self.page_request(process_id, bounds, page))
            .await
            .map_err(|source| SequencerError::Transport {
                process_id: process_id.to_string(),
                page,
                source,
            })?;

        if !response.is_success() {
            warn!(process_id, page, status = response.status, "Sequencer returned error status");
            return Err(SequencerError::UpstreamStatus {
                process_id: process_id.to_string(),
                page,
                status: response.status,
            });
        }

        response.json().map_err(|e| SequencerError::Shape {
            process_id: process_id.to_string(),
            page,
            reason: e.to_string(),
        })
    }

    async fn load_all(
        &self,
        request: &LoadInteractionsRequest,
    ) -> Result<Vec<Interaction>, SequencerError> {
        let process_id = request.process_id.as_str();
        let bounds = map_bounds(&request.bounds)?;

        let mut ascending: VecDeque<Interaction> = VecDeque::new();
        let mut page: u64 = 1;

        loop {
            if page > self.config.max_pages as u64 {
                return Err(SequencerError::PaginationLimit {
                    process_id: process_id.to_string(),
                    max_pages: self.config.max_pages,
                });
            }

            let body = self.fetch_page(process_id, &bounds, page).await?;
            let has_more = body.has_more();
            debug!(
                process_id,
                page,
                count = body.interactions.len(),
                has_more,
                "Loaded interaction page"
            );

            for entry in body.interactions {
                ascending.push_front(decode_interaction(process_id, entry.interaction)?);
            }

            if !has_more {
                break;
            }
            page += 1;
        }

        let interactions: Vec<Interaction> = ascending.into();

        if !is_ascending(&interactions) {
            warn!(process_id, "Sequencer returned interactions out of sort-key order");
        }

        info!(
            process_id,
            pages = page,
            count = interactions.len(),
            from = ?bounds.from,
            to = ?bounds.to,
            "Loaded interactions"
        );
        Ok(interactions)
    }
}

/// Whether `interactions` are in non-decreasing sort-key order, comparing
/// keys with their heights padded.
pub(crate) fn is_ascending(interactions: &[Interaction]) -> bool {
    interactions
        .windows(2)
        .all(|pair| pad_block_height(&pair[0].sort_key) <= pad_block_height(&pair[1].sort_key))
}

#[async_trait]
impl SequencerApi for SequencerClient {
    async fn load_interactions(
        &self,
        request: &LoadInteractionsRequest,
    ) -> Result<Vec<Interaction>, SequencerError> {
        let span = info_span!(
            "load_interactions",
            process_id = %request.process_id,
            request_id = %Uuid::new_v4()
        );
        self.load_all(request).instrument(span).await
    }
}
