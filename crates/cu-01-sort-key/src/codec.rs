//! # Sort-Key Codec
//!
//! Bound arithmetic for sequencer range queries.
//!
//! The sequencer compares keys as strings, so an unpadded height such as
//! `"9"` would sort after `"10"`. Every key leaving this module has its
//! height left-padded with `'0'` to [`BLOCK_HEIGHT_WIDTH`] characters.

use crate::domain::errors::SortKeyError;
use crate::domain::value_objects::SortKeyBounds;

/// Width of the height component once padded.
pub const BLOCK_HEIGHT_WIDTH: usize = 12;

pub(crate) fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Left-pad the height component of `sort_key` to [`BLOCK_HEIGHT_WIDTH`].
///
/// Remaining components are kept verbatim. An empty key is returned as-is,
/// and a height already at or beyond the width is not touched, so the
/// function is idempotent.
pub fn pad_block_height(sort_key: &str) -> String {
    if sort_key.is_empty() {
        return String::new();
    }

    match sort_key.split_once(',') {
        Some((height, rest)) => {
            format!("{height:0>width$},{rest}", width = BLOCK_HEIGHT_WIDTH)
        }
        None => format!("{sort_key:0>width$}", width = BLOCK_HEIGHT_WIDTH),
    }
}

/// Turn a `to` bound into one the sequencer treats as inclusive.
///
/// - More than one component: already precise, only padded.
/// - Height only: the sequencer excludes that block, so the height is
///   incremented by one before padding.
/// - Empty: returned unchanged.
///
/// A height-only key that is not a base-10 integer is rejected with
/// [`SortKeyError::InvalidHeight`].
pub fn normalize_upper_bound(sort_key: &str) -> Result<String, SortKeyError> {
    if sort_key.is_empty() {
        return Ok(String::new());
    }

    if sort_key.contains(',') {
        return Ok(pad_block_height(sort_key));
    }

    if !is_decimal(sort_key) {
        return Err(SortKeyError::InvalidHeight(sort_key.to_string()));
    }
    let height: u64 = sort_key
        .parse()
        .map_err(|_| SortKeyError::InvalidHeight(sort_key.to_string()))?;
    let next = height
        .checked_add(1)
        .ok_or_else(|| SortKeyError::HeightOverflow(sort_key.to_string()))?;

    Ok(pad_block_height(&next.to_string()))
}

/// Normalize both ends of a range query.
pub fn map_bounds(bounds: &SortKeyBounds) -> Result<SortKeyBounds, SortKeyError> {
    let to = match bounds.to.as_deref() {
        Some(to) => Some(normalize_upper_bound(to)?),
        None => None,
    };

    Ok(SortKeyBounds {
        from: bounds.from.as_deref().map(pad_block_height),
        to,
    })
}
