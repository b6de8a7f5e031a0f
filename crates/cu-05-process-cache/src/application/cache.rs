//! SQLite-backed process cache.
//!
//! One connection guarded by a mutex; every statement runs on the blocking
//! pool so the async runtime is never stalled by disk I/O.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rusqlite::{params_from_iter, Connection, OptionalExtension};
use serde_json::{Map, Value};
use shared_types::{Block, Module, Process};
use tracing::{debug, info};

use crate::config::CacheConfig;
use crate::domain::errors::CacheError;
use crate::domain::rows::{
    block_params, cell_to_json, module_params, process_params, to_sql_int, BlockRow, ModuleRow,
    ProcessRow,
};
use crate::domain::schema::{
    INSERT_BLOCK, INSERT_MODULE, INSERT_PROCESS, SCHEMA, SELECT_BLOCKS_IN_RANGE, SELECT_MODULE,
    SELECT_PROCESS,
};
use crate::ports::inbound::ProcessCacheApi;

/// Positional statement parameter.
pub type SqlValue = rusqlite::types::Value;

/// A result row keyed by column name.
pub type Row = Map<String, Value>;

/// Outcome of [`ProcessCache::execute`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecuteResult {
    pub changes: usize,
    pub last_insert_rowid: i64,
}

/// Handle to the cache database. Clones share the same connection.
#[derive(Clone)]
pub struct ProcessCache {
    path: PathBuf,
    conn: Arc<Mutex<Connection>>,
}

impl std::fmt::Debug for ProcessCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessCache").field("path", &self.path).finish()
    }
}

impl ProcessCache {
    /// Open (or create) the database and apply the schema. Blocking.
    pub fn open(config: &CacheConfig) -> Result<Self, CacheError> {
        let path = config.db_path.clone();
        let open_err = |source| CacheError::Open {
            path: path.clone(),
            source,
        };

        let conn = Connection::open(&path).map_err(open_err)?;
        conn.pragma_update(None, "journal_mode", "WAL").map_err(open_err)?;
        conn.busy_timeout(config.busy_timeout).map_err(open_err)?;
        conn.execute_batch(SCHEMA).map_err(open_err)?;

        info!(path = %path.display(), "Process cache opened");

        Ok(Self {
            path,
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `f` against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, operation: &'static str, f: F) -> Result<T, CacheError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T, CacheError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn.lock();
            f(&mut *guard)
        })
        .await
        .map_err(|e| CacheError::Task {
            operation,
            reason: e.to_string(),
        })?
    }

    /// Run a read statement, returning every row as a column → value map.
    pub async fn query(
        &self,
        sql: impl Into<String>,
        params: Vec<SqlValue>,
    ) -> Result<Vec<Row>, CacheError> {
        let sql = sql.into();
        self.with_conn("query", move |conn| {
            let mut stmt = conn.prepare(&sql).map_err(CacheError::sqlite("query"))?;
            let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

            let mut rows = stmt
                .query(params_from_iter(params.iter()))
                .map_err(CacheError::sqlite("query"))?;

            let mut out = Vec::new();
            while let Some(row) = rows.next().map_err(CacheError::sqlite("query"))? {
                let mut record = Row::new();
                for (index, name) in columns.iter().enumerate() {
                    let cell = row.get_ref(index).map_err(CacheError::sqlite("query"))?;
                    record.insert(name.clone(), cell_to_json(cell));
                }
                out.push(record);
            }
            Ok(out)
        })
        .await
    }

    /// Run a write statement.
    pub async fn execute(
        &self,
        sql: impl Into<String>,
        params: Vec<SqlValue>,
    ) -> Result<ExecuteResult, CacheError> {
        let sql = sql.into();
        self.with_conn("execute", move |conn| {
            let changes = conn
                .execute(&sql, params_from_iter(params.iter()))
                .map_err(CacheError::sqlite("execute"))?;
            Ok(ExecuteResult {
                changes,
                last_insert_rowid: conn.last_insert_rowid(),
            })
        })
        .await
    }
}

#[async_trait]
impl ProcessCacheApi for ProcessCache {
    async fn save_process(&self, process: &Process) -> Result<(), CacheError> {
        let params = process_params(process)?;
        let result = self.execute(INSERT_PROCESS, params).await?;
        debug!(process_id = %process.id, inserted = result.changes, "Saved process");
        Ok(())
    }

    async fn find_process(&self, id: &str) -> Result<Option<Process>, CacheError> {
        let id = id.to_string();
        let row = self
            .with_conn("find_process", move |conn| {
                conn.query_row(SELECT_PROCESS, [&id], ProcessRow::read)
                    .optional()
                    .map_err(CacheError::sqlite("find_process"))
            })
            .await?;
        row.map(ProcessRow::into_process).transpose()
    }

    async fn save_module(&self, module: &Module) -> Result<(), CacheError> {
        let params = module_params(module)?;
        let result = self.execute(INSERT_MODULE, params).await?;
        debug!(module_id = %module.id, inserted = result.changes, "Saved module");
        Ok(())
    }

    async fn find_module(&self, id: &str) -> Result<Option<Module>, CacheError> {
        let id = id.to_string();
        let row = self
            .with_conn("find_module", move |conn| {
                conn.query_row(SELECT_MODULE, [&id], ModuleRow::read)
                    .optional()
                    .map_err(CacheError::sqlite("find_module"))
            })
            .await?;
        row.map(ModuleRow::into_module).transpose()
    }

    async fn save_blocks(&self, blocks: &[Block]) -> Result<(), CacheError> {
        if blocks.is_empty() {
            return Ok(());
        }
        let rows = blocks
            .iter()
            .map(block_params)
            .collect::<Result<Vec<_>, _>>()?;
        let count = rows.len();

        let inserted = self
            .with_conn("save_blocks", move |conn| {
                let tx = conn.transaction().map_err(CacheError::sqlite("save_blocks"))?;
                let mut inserted = 0;
                {
                    let mut stmt = tx
                        .prepare_cached(INSERT_BLOCK)
                        .map_err(CacheError::sqlite("save_blocks"))?;
                    for params in &rows {
                        inserted += stmt
                            .execute(params_from_iter(params.iter()))
                            .map_err(CacheError::sqlite("save_blocks"))?;
                    }
                }
                tx.commit().map_err(CacheError::sqlite("save_blocks"))?;
                Ok(inserted)
            })
            .await?;

        debug!(count, inserted, "Saved blocks");
        Ok(())
    }

    async fn find_blocks(
        &self,
        min_height: u64,
        max_height: u64,
    ) -> Result<Vec<Block>, CacheError> {
        let min = to_sql_int(min_height)?;
        let max = to_sql_int(max_height)?;
        let rows = self
            .with_conn("find_blocks", move |conn| {
                let mut stmt = conn
                    .prepare_cached(SELECT_BLOCKS_IN_RANGE)
                    .map_err(CacheError::sqlite("find_blocks"))?;
                let rows = stmt
                    .query_map([min, max], BlockRow::read)
                    .map_err(CacheError::sqlite("find_blocks"))?
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(CacheError::sqlite("find_blocks"))?;
                Ok(rows)
            })
            .await?;
        rows.into_iter().map(BlockRow::into_block).collect()
    }
}
