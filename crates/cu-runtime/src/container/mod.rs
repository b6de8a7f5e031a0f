//! # Subsystem Container
//!
//! Configuration plus the single place where transports, clients, the
//! hydrator and the cache provider are constructed.

pub mod config;
pub mod subsystems;

pub use config::{ConfigError, CuConfig};
pub use subsystems::SubsystemContainer;
