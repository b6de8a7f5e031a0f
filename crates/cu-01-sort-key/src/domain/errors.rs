//! Error types for sort-key handling

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortKeyError {
    /// Height component is not a base-10 unsigned integer.
    #[error("Invalid block height in sort key: {0:?}")]
    InvalidHeight(String),

    /// Height + 1 does not fit in a u64.
    #[error("Block height overflow in sort key: {0}")]
    HeightOverflow(String),

    /// Timestamp component is not a base-10 unsigned integer.
    #[error("Invalid timestamp in sort key: {0:?}")]
    InvalidTimestamp(String),

    /// More than three components.
    #[error("Too many sort key components: {0}")]
    TooManyComponents(usize),

    #[error("Empty sort key")]
    Empty,
}
