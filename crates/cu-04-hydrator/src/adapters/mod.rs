//! Adapters for the hydrator's outbound ports.

pub mod gateway;
