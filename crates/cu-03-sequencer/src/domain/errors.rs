//! Error types for the sequencer client

use cu_01_sort_key::SortKeyError;
use shared_http::TransportError;
use thiserror::Error;

/// All errors that abort an interaction load.
///
/// None of these are retried; a failed page fails the whole load.
#[derive(Debug, Error)]
pub enum SequencerError {
    /// Range bounds could not be normalized.
    #[error("Invalid range bound: {0}")]
    Bounds(#[from] SortKeyError),

    /// Round trip failed before a response arrived.
    #[error("load_interactions {process_id} page {page}: transport failure: {source}")]
    Transport {
        process_id: String,
        page: u64,
        #[source]
        source: TransportError,
    },

    /// Sequencer answered with a non-2xx status.
    #[error("load_interactions {process_id} page {page}: sequencer returned HTTP {status}")]
    UpstreamStatus {
        process_id: String,
        page: u64,
        status: u16,
    },

    /// Page body does not match the expected shape.
    #[error("load_interactions {process_id} page {page}: unexpected response shape: {reason}")]
    Shape {
        process_id: String,
        page: u64,
        reason: String,
    },

    /// An interaction's `Input` tag is absent or malformed.
    #[error("load_interactions {process_id}: cannot decode input of {sort_key}: {reason}")]
    Decode {
        process_id: String,
        sort_key: String,
        reason: String,
    },

    /// Paging metadata never reported the last page.
    #[error("load_interactions {process_id}: exceeded {max_pages} pages")]
    PaginationLimit { process_id: String, max_pages: usize },
}
