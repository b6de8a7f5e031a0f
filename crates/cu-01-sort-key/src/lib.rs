//! # CU-01: Sort-Key Codec
//!
//! Pure functions over the sequencer's composite ordering key
//! `height[,millis[,hash]]`.
//!
//! ## Architecture
//!
//! - **Domain**: `SortKey` value object, `SortKeyBounds`, `SortKeyError`
//! - **Codec**: padding, upper-bound normalization, bound mapping
//!
//! ## Invariant
//!
//! Once normalized, the height component is exactly
//! [`BLOCK_HEIGHT_WIDTH`] characters wide, so lexicographic comparison of
//! keys equals numeric comparison of heights.

pub mod codec;
pub mod domain;

pub use codec::{map_bounds, normalize_upper_bound, pad_block_height, BLOCK_HEIGHT_WIDTH};
pub use domain::errors::SortKeyError;
pub use domain::value_objects::{SortKey, SortKeyBounds};
