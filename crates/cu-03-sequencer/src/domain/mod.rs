//! Domain module for the sequencer client.

pub mod errors;
pub mod wire;

pub use errors::*;
pub use wire::*;
