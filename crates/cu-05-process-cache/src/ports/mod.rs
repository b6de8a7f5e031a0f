//! Ports module for the process cache.

pub mod inbound;

pub use inbound::ProcessCacheApi;
