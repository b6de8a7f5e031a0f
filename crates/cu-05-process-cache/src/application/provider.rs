//! Lazily-opened, shared cache handle.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::debug;

use crate::application::cache::ProcessCache;
use crate::config::CacheConfig;
use crate::domain::errors::CacheError;

/// Opens the cache on first use and hands out the same handle afterwards.
///
/// Concurrent first callers wait on a single open. A failed open leaves the
/// provider empty so a later call may retry.
pub struct ProcessCacheProvider {
    config: CacheConfig,
    cell: OnceCell<Arc<ProcessCache>>,
}

impl ProcessCacheProvider {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            cell: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }

    pub async fn get(&self) -> Result<Arc<ProcessCache>, CacheError> {
        self.cell
            .get_or_try_init(|| async {
                debug!(path = %self.config.db_path.display(), "Opening process cache");
                let config = self.config.clone();
                let cache = tokio::task::spawn_blocking(move || ProcessCache::open(&config))
                    .await
                    .map_err(|e| CacheError::Task {
                        operation: "open",
                        reason: e.to_string(),
                    })??;
                Ok::<_, CacheError>(Arc::new(cache))
            })
            .await
            .map(Arc::clone)
    }
}
