//! # Wire Shapes
//!
//! Response body of `GET /gateway/v2/interactions-sort-key`:
//!
//! ```text
//! { "paging": { "page": 1, "pages": 3, "limit": 5000, "items": 5000, "total": 12001 },
//!   "interactions": [ { "interaction": { "id", "tags", "block", "sortKey", ... } } ] }
//! ```
//!
//! Interactions arrive newest first.

use cu_01_sort_key::SortKeyBounds;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use shared_types::{Block, Tag};

/// Input of a range query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadInteractionsRequest {
    pub process_id: String,
    pub bounds: SortKeyBounds,
}

impl LoadInteractionsRequest {
    pub fn new(process_id: impl Into<String>, bounds: SortKeyBounds) -> Self {
        Self {
            process_id: process_id.into(),
            bounds,
        }
    }
}

/// Pagination metadata returned with each page.
///
/// Missing members default to `None`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub total: Option<u64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub limit: Option<u64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub items: Option<u64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub page: Option<u64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub pages: Option<u64>,
}

impl Paging {
    /// Whether the sequencer reports a page after this one.
    ///
    /// Without both `page` and `pages` there is nothing to follow.
    pub fn has_more(&self) -> bool {
        match (self.page, self.pages) {
            (Some(page), Some(pages)) => page < pages,
            _ => false,
        }
    }
}

/// An interaction as sent by the sequencer, before input decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireInteraction {
    #[serde(default)]
    pub id: Option<String>,
    pub tags: Vec<Tag>,
    pub block: Block,
    #[serde(rename = "sortKey")]
    pub sort_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireInteractionEntry {
    pub interaction: WireInteraction,
}

/// One page of the range query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequencerPage {
    #[serde(default)]
    pub paging: Option<Paging>,
    pub interactions: Vec<WireInteractionEntry>,
}

impl SequencerPage {
    pub fn has_more(&self) -> bool {
        self.paging.as_ref().is_some_and(Paging::has_more)
    }
}
