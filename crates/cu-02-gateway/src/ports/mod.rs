//! Ports module for the gateway client.

pub mod inbound;

pub use inbound::GatewayApi;
