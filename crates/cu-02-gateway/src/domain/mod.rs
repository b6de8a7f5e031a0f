//! Domain module for the gateway client.

pub mod errors;
pub mod graphql;

pub use errors::*;
pub use graphql::*;
