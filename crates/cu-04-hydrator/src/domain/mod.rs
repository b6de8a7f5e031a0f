//! Domain module for the message hydrator.

pub mod encoding;
pub mod errors;

pub use encoding::*;
pub use errors::*;
