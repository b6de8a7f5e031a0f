//! # Process Loader
//!
//! Everything the evaluation engine needs for one process, cache first.
//!
//! - `load_process` / `load_module`: cache hit returns immediately; a miss
//!   loads from the gateway and writes through before returning.
//! - `load_blocks`: served from the cache when the range is fully cached,
//!   otherwise loaded from the gateway and written through.
//! - `load_messages`: every interaction in range, converted to envelopes
//!   and hydrated on a background task.

use std::sync::Arc;

use cu_01_sort_key::SortKeyBounds;
use cu_02_gateway::GatewayApi;
use cu_03_sequencer::{LoadInteractionsRequest, SequencerApi};
use cu_04_hydrator::{HydratedStream, MessageHydrator};
use cu_05_process_cache::ProcessCacheApi;
use futures::stream;
use shared_types::{Block, MessageEnvelope, Module, Process};
use tracing::{debug, info};

use crate::errors::RuntimeError;

pub struct ProcessLoader {
    gateway: Arc<dyn GatewayApi>,
    sequencer: Arc<dyn SequencerApi>,
    hydrator: Arc<MessageHydrator>,
    cache: Arc<dyn ProcessCacheApi>,
}

impl ProcessLoader {
    pub fn new(
        gateway: Arc<dyn GatewayApi>,
        sequencer: Arc<dyn SequencerApi>,
        hydrator: Arc<MessageHydrator>,
        cache: Arc<dyn ProcessCacheApi>,
    ) -> Self {
        Self {
            gateway,
            sequencer,
            hydrator,
            cache,
        }
    }

    pub async fn load_process(&self, process_id: &str) -> Result<Process, RuntimeError> {
        if let Some(process) = self.cache.find_process(process_id).await? {
            debug!(process_id, "Process cache hit");
            return Ok(process);
        }

        let process = self.gateway.load_process(process_id).await?;
        self.cache.save_process(&process).await?;
        info!(process_id, module_id = ?process.module_id(), "Loaded process from gateway");
        Ok(process)
    }

    pub async fn load_module(&self, module_id: &str) -> Result<Module, RuntimeError> {
        if let Some(module) = self.cache.find_module(module_id).await? {
            debug!(module_id, "Module cache hit");
            return Ok(module);
        }

        let module = self.gateway.load_module(module_id).await?;
        self.cache.save_module(&module).await?;
        info!(module_id, "Loaded module from gateway");
        Ok(module)
    }

    /// Blocks with `min_height <= height <= max_height`, ascending.
    pub async fn load_blocks(
        &self,
        min_height: u64,
        max_height: u64,
    ) -> Result<Vec<Block>, RuntimeError> {
        if min_height > max_height {
            return Ok(Vec::new());
        }

        let cached = self.cache.find_blocks(min_height, max_height).await?;
        let wanted = max_height - min_height + 1;
        if cached.len() as u64 == wanted {
            debug!(min_height, max_height, "Block range cache hit");
            return Ok(cached);
        }

        let blocks = self.gateway.load_blocks_meta(min_height, max_height).await?;
        self.cache.save_blocks(&blocks).await?;
        info!(
            min_height,
            max_height,
            cached = cached.len(),
            loaded = blocks.len(),
            "Loaded blocks from gateway"
        );
        Ok(blocks)
    }

    /// Hydrated envelopes for every interaction of `process_id` in
    /// `[from, to]`, in sort-key order.
    ///
    /// The interaction history is loaded in full before the stream is
    /// returned, so sequencer failures surface here rather than mid-stream.
    pub async fn load_messages(
        &self,
        process_id: &str,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<HydratedStream, RuntimeError> {
        let request = LoadInteractionsRequest::new(process_id, SortKeyBounds::new(from, to));
        let interactions = self.sequencer.load_interactions(&request).await?;
        info!(process_id, count = interactions.len(), "Streaming messages");

        let envelopes = stream::iter(interactions.into_iter().map(MessageEnvelope::from));
        Ok(Arc::clone(&self.hydrator).spawn(envelopes))
    }
}
