//! # CU-04: Message Hydrator
//!
//! Streaming pass that resolves messages whose data lives in another
//! transaction.
//!
//! A message tagged `Load = <tx id>` has its `data` replaced with
//! `{id, anchor, owner, tags, data}` of the referenced transaction, the raw
//! bytes base64-encoded. Every other envelope passes through untouched.
//! Output order and length always equal input order and length.
//!
//! ## Architecture
//!
//! - **Domain**: `HydrationError`, base64 payload encoding
//! - **Ports**: Outbound `TransactionLoader`
//! - **Adapters**: `GatewayTransactionLoader` over `cu_02_gateway::GatewayApi`
//! - **Application**: `MessageHydrator` (lazy stream and spawned pipeline)
//!
//! ## Cancellation
//!
//! The lazy stream only pulls the next envelope when polled, so dropping it
//! drops any in-flight fetch. The spawned pipeline stops as soon as its
//! receiver is closed.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::gateway::GatewayTransactionLoader;
pub use application::hydrator::{HydratedStream, MessageHydrator};
pub use config::HydratorConfig;
pub use domain::encoding::{decode_data, encode_data};
pub use domain::errors::HydrationError;
pub use ports::outbound::TransactionLoader;
