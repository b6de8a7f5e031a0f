//! Configuration for the process cache

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// SQLite database file. Created on first open.
    pub db_path: PathBuf,
    /// How long a statement waits on a locked database.
    pub busy_timeout: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("ao-cache.sqlite"),
            busy_timeout: Duration::from_secs(5),
        }
    }
}

impl CacheConfig {
    pub fn at(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }
}
