//! Inbound Ports (Driving Ports / API)

use async_trait::async_trait;
use shared_types::{Block, Module, Process};

use crate::domain::errors::CacheError;

/// Typed access to cached records.
///
/// Saves are idempotent: saving an id that already exists leaves the stored
/// row untouched.
#[async_trait]
pub trait ProcessCacheApi: Send + Sync {
    async fn save_process(&self, process: &Process) -> Result<(), CacheError>;

    async fn find_process(&self, id: &str) -> Result<Option<Process>, CacheError>;

    async fn save_module(&self, module: &Module) -> Result<(), CacheError>;

    async fn find_module(&self, id: &str) -> Result<Option<Module>, CacheError>;

    /// Save all `blocks` in one transaction.
    async fn save_blocks(&self, blocks: &[Block]) -> Result<(), CacheError>;

    /// Cached blocks with `min_height <= height <= max_height`, ascending.
    async fn find_blocks(&self, min_height: u64, max_height: u64)
        -> Result<Vec<Block>, CacheError>;
}
