//! Ports module for the sequencer client.

pub mod inbound;

pub use inbound::SequencerApi;
