//! # Integration Tests
//!
//! - `pagination` - sequencer paging and ordering
//! - `hydration` - interactions → envelopes → hydrated stream
//! - `process_cache` - cache-first loading through the runtime

pub mod hydration;
pub mod pagination;
pub mod process_cache;
