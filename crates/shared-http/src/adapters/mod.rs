//! Transport adapters.

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod reqwest_transport;
