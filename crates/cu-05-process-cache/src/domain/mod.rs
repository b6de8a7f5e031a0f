//! Domain module for the process cache.

pub mod errors;
pub mod rows;
pub mod schema;

pub use errors::*;
