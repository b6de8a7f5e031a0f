//! Application layer for the process cache.

pub mod cache;
pub mod provider;
