//! Application layer for the sequencer client.

pub mod decode;
pub mod service;
