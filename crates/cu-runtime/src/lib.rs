//! # CU Runtime
//!
//! Composition root of the compute-unit data layer.
//!
//! - `container/` - configuration and subsystem wiring
//! - `loader` - cache-first process/module/block loading and the hydrated
//!   message stream handed to the evaluation engine
//!
//! ## Data Flow
//!
//! ```text
//! SequencerClient ──interactions──→ MessageEnvelope ──→ MessageHydrator ──→ engine
//! GatewayClient ──process/module/blocks──→ ProcessCache (write-through) ──→ engine
//! ```

pub mod container;
pub mod errors;
pub mod loader;

pub use container::{ConfigError, CuConfig, SubsystemContainer};
pub use errors::RuntimeError;
pub use loader::ProcessLoader;
