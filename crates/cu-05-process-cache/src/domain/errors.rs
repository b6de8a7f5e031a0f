//! Error types for the process cache

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    /// Database could not be opened or its schema applied. Fatal at startup.
    #[error("Failed to open cache at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("SQLite error during {operation}: {source}")]
    Sqlite {
        operation: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to encode {column} for {id}: {source}")]
    Encode {
        id: String,
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Stored row does not decode into its entity.
    #[error("Corrupt row {id} in {table}: {reason}")]
    Corrupt {
        table: &'static str,
        id: String,
        reason: String,
    },

    #[error("Value {value} does not fit an SQLite integer")]
    OutOfRange { value: u64 },

    #[error("Cache task for {operation} failed: {reason}")]
    Task {
        operation: &'static str,
        reason: String,
    },
}

impl CacheError {
    pub(crate) fn sqlite(operation: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| CacheError::Sqlite { operation, source }
    }
}
