//! # Shared Types Crate
//!
//! This crate contains the canonical entities exchanged between the gateway
//! client, the sequencer client, the hydrator and the process cache.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Parse, don't trust**: Numeric fields arriving as JSON numbers or
//!   numeric strings are normalized to `u64` at deserialization time.
//! - **Order matters**: Tag lists keep their wire order and may repeat names.

pub mod entities;
pub mod serde_helpers;
pub mod tags;

pub use entities::*;
pub use tags::*;
