//! # CU-05: Process Cache
//!
//! Embedded relational store for the three entity kinds the compute unit
//! caches: processes, modules and blocks.
//!
//! ## Architecture
//!
//! - **Domain**: schema, row codecs, `CacheError`
//! - **Ports**: Inbound `ProcessCacheApi` (typed accessors)
//! - **Application**: `ProcessCache` (SQLite handle), `ProcessCacheProvider`
//!   (lazy, race-free singleton)
//!
//! ## Tables
//!
//! | table | key | JSON columns |
//! |---|---|---|
//! | `processes` | `id` | `tags`, `block` |
//! | `modules` | `id` | `tags` |
//! | `blocks` | `id` | none (indexed by `height`) |
//!
//! Schema creation is idempotent. Rows are never deleted.

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::cache::{ExecuteResult, ProcessCache, Row, SqlValue};
pub use application::provider::ProcessCacheProvider;
pub use config::CacheConfig;
pub use domain::errors::CacheError;
pub use ports::inbound::ProcessCacheApi;
