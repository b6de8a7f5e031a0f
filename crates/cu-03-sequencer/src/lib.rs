//! # CU-03: Sequencer Client
//!
//! Loads the ordered interaction history of a process from the sequencer.
//!
//! ## Pipeline
//!
//! 1. Normalize bounds with the sort-key codec (inclusive `to`)
//! 2. Page through `interactions-sort-key` until the sequencer reports no
//!    further pages
//! 3. Decode and validate every interaction's `Input` tag
//! 4. Restore chronological order (the wire order is newest first)
//!
//! ## Architecture
//!
//! - **Domain**: wire shapes, `SequencerError`
//! - **Ports**: Inbound `SequencerApi`; outbound is `shared_http::HttpTransport`
//! - **Application**: `SequencerClient`, interaction decoding

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::decode::decode_interaction;
pub use application::service::SequencerClient;
pub use config::SequencerConfig;
pub use domain::errors::SequencerError;
pub use domain::wire::{LoadInteractionsRequest, Paging, SequencerPage, WireInteraction};
pub use ports::inbound::SequencerApi;
