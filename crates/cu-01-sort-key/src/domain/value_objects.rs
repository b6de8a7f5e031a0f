//! # Value Objects
//!
//! Parsed sort keys and range bounds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::{is_decimal, BLOCK_HEIGHT_WIDTH};
use crate::domain::errors::SortKeyError;

/// Range bounds for a sequencer query.
///
/// `from` is inclusive. A height-only `to` is exclusive of that block on the
/// wire until passed through [`crate::map_bounds`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKeyBounds {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl SortKeyBounds {
    pub fn new(from: Option<impl Into<String>>, to: Option<impl Into<String>>) -> Self {
        Self {
            from: from.map(Into::into),
            to: to.map(Into::into),
        }
    }

    /// No bounds: the whole history.
    pub fn unbounded() -> Self {
        Self::default()
    }
}

/// A parsed sort key.
///
/// Ordering is by height, then timestamp, then hash, with a missing
/// component sorting before any present one. This agrees with the padded
/// string order for fixed-width millisecond timestamps.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    pub height: u64,
    pub timestamp: Option<u64>,
    pub hash: Option<String>,
}

impl SortKey {
    pub fn at_height(height: u64) -> Self {
        Self {
            height,
            timestamp: None,
            hash: None,
        }
    }
}

impl FromStr for SortKey {
    type Err = SortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SortKeyError::Empty);
        }

        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() > 3 {
            return Err(SortKeyError::TooManyComponents(parts.len()));
        }

        let height_part = parts[0];
        if !is_decimal(height_part) {
            return Err(SortKeyError::InvalidHeight(height_part.to_string()));
        }
        let height = height_part
            .parse::<u64>()
            .map_err(|_| SortKeyError::InvalidHeight(height_part.to_string()))?;

        let timestamp = match parts.get(1) {
            Some(ts) if is_decimal(ts) => Some(
                ts.parse::<u64>()
                    .map_err(|_| SortKeyError::InvalidTimestamp(ts.to_string()))?,
            ),
            Some(ts) => return Err(SortKeyError::InvalidTimestamp(ts.to_string())),
            None => None,
        };

        Ok(Self {
            height,
            timestamp,
            hash: parts.get(2).map(|h| h.to_string()),
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>width$}", self.height, width = BLOCK_HEIGHT_WIDTH)?;
        if let Some(ts) = self.timestamp {
            write!(f, ",{ts}")?;
        }
        if let Some(hash) = &self.hash {
            write!(f, ",{hash}")?;
        }
        Ok(())
    }
}
