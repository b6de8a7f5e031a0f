//! Application layer for the gateway client.

pub mod service;
