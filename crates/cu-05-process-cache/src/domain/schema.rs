//! Cache schema. Every statement is safe to run on an existing database.

pub const PROCESSES_TABLE: &str = "processes";
pub const MODULES_TABLE: &str = "modules";
pub const BLOCKS_TABLE: &str = "blocks";

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS processes (
    id        TEXT PRIMARY KEY,
    signature TEXT,
    data      TEXT,
    anchor    TEXT,
    owner     TEXT NOT NULL,
    tags      TEXT NOT NULL,
    block     TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS modules (
    id    TEXT PRIMARY KEY,
    owner TEXT NOT NULL,
    tags  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS blocks (
    id        TEXT PRIMARY KEY,
    height    INTEGER NOT NULL,
    timestamp INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_blocks_height ON blocks (height);
"#;

pub const INSERT_PROCESS: &str = "INSERT OR IGNORE INTO processes \
    (id, signature, data, anchor, owner, tags, block) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

pub const SELECT_PROCESS: &str =
    "SELECT id, signature, data, anchor, owner, tags, block FROM processes WHERE id = ?1";

pub const INSERT_MODULE: &str =
    "INSERT OR IGNORE INTO modules (id, owner, tags) VALUES (?1, ?2, ?3)";

pub const SELECT_MODULE: &str = "SELECT id, owner, tags FROM modules WHERE id = ?1";

pub const INSERT_BLOCK: &str =
    "INSERT OR IGNORE INTO blocks (id, height, timestamp) VALUES (?1, ?2, ?3)";

pub const SELECT_BLOCKS_IN_RANGE: &str = "SELECT id, height, timestamp FROM blocks \
    WHERE height >= ?1 AND height <= ?2 ORDER BY height ASC";

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 3);
    }
}
