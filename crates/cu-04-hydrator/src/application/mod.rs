//! Application layer for the message hydrator.

pub mod hydrator;

pub use hydrator::*;
