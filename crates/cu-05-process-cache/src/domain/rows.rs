//! Conversions between entities and SQLite rows.

use rusqlite::types::{Value as SqlValue, ValueRef};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared_types::{Block, Module, Process, Tag};

use super::errors::CacheError;
use super::schema::{BLOCKS_TABLE, MODULES_TABLE, PROCESSES_TABLE};

pub(crate) fn to_sql_int(value: u64) -> Result<i64, CacheError> {
    i64::try_from(value).map_err(|_| CacheError::OutOfRange { value })
}

fn from_sql_int(table: &'static str, id: &str, value: i64) -> Result<u64, CacheError> {
    u64::try_from(value).map_err(|_| CacheError::Corrupt {
        table,
        id: id.to_string(),
        reason: format!("negative integer {value}"),
    })
}

fn encode_json<T: Serialize>(id: &str, column: &'static str, value: &T) -> Result<String, CacheError> {
    serde_json::to_string(value).map_err(|source| CacheError::Encode {
        id: id.to_string(),
        column,
        source,
    })
}

fn decode_json<T: DeserializeOwned>(
    table: &'static str,
    id: &str,
    column: &str,
    text: &str,
) -> Result<T, CacheError> {
    serde_json::from_str(text).map_err(|e| CacheError::Corrupt {
        table,
        id: id.to_string(),
        reason: format!("{column}: {e}"),
    })
}

pub(crate) fn process_params(process: &Process) -> Result<Vec<SqlValue>, CacheError> {
    Ok(vec![
        SqlValue::from(process.id.clone()),
        SqlValue::from(process.signature.clone()),
        SqlValue::from(process.data.clone()),
        SqlValue::from(process.anchor.clone()),
        SqlValue::from(process.owner.clone()),
        SqlValue::from(encode_json(&process.id, "tags", &process.tags)?),
        SqlValue::from(encode_json(&process.id, "block", &process.block)?),
    ])
}

/// Raw `processes` row, decoded outside the SQLite callback.
pub(crate) struct ProcessRow {
    pub id: String,
    pub signature: Option<String>,
    pub data: Option<String>,
    pub anchor: Option<String>,
    pub owner: String,
    pub tags: String,
    pub block: String,
}

impl ProcessRow {
    pub fn read(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            signature: row.get(1)?,
            data: row.get(2)?,
            anchor: row.get(3)?,
            owner: row.get(4)?,
            tags: row.get(5)?,
            block: row.get(6)?,
        })
    }

    pub fn into_process(self) -> Result<Process, CacheError> {
        let tags: Vec<Tag> = decode_json(PROCESSES_TABLE, &self.id, "tags", &self.tags)?;
        let block: Block = decode_json(PROCESSES_TABLE, &self.id, "block", &self.block)?;
        Ok(Process {
            id: self.id,
            signature: self.signature,
            data: self.data,
            anchor: self.anchor,
            owner: self.owner,
            tags,
            block,
        })
    }
}

pub(crate) fn module_params(module: &Module) -> Result<Vec<SqlValue>, CacheError> {
    Ok(vec![
        SqlValue::from(module.id.clone()),
        SqlValue::from(module.owner.clone()),
        SqlValue::from(encode_json(&module.id, "tags", &module.tags)?),
    ])
}

pub(crate) struct ModuleRow {
    pub id: String,
    pub owner: String,
    pub tags: String,
}

impl ModuleRow {
    pub fn read(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            owner: row.get(1)?,
            tags: row.get(2)?,
        })
    }

    pub fn into_module(self) -> Result<Module, CacheError> {
        let tags = decode_json(MODULES_TABLE, &self.id, "tags", &self.tags)?;
        Ok(Module {
            id: self.id,
            owner: self.owner,
            tags,
        })
    }
}

pub(crate) fn block_params(block: &Block) -> Result<Vec<SqlValue>, CacheError> {
    Ok(vec![
        SqlValue::from(block.id.clone()),
        SqlValue::from(to_sql_int(block.height)?),
        SqlValue::from(to_sql_int(block.timestamp)?),
    ])
}

pub(crate) struct BlockRow {
    pub id: String,
    pub height: i64,
    pub timestamp: i64,
}

impl BlockRow {
    pub fn read(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            height: row.get(1)?,
            timestamp: row.get(2)?,
        })
    }

    pub fn into_block(self) -> Result<Block, CacheError> {
        Ok(Block {
            height: from_sql_int(BLOCKS_TABLE, &self.id, self.height)?,
            timestamp: from_sql_int(BLOCKS_TABLE, &self.id, self.timestamp)?,
            id: self.id,
        })
    }
}

/// JSON view of a single SQLite cell.
pub(crate) fn cell_to_json(cell: ValueRef<'_>) -> Value {
    match cell {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(text) => Value::String(String::from_utf8_lossy(text).into_owned()),
        ValueRef::Blob(bytes) => Value::Array(bytes.iter().map(|b| Value::from(*b)).collect()),
    }
}
