//! Ports module for the message hydrator.

pub mod outbound;

pub use outbound::TransactionLoader;
