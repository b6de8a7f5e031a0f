//! Configuration for the sequencer client

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SequencerConfig {
    /// Base URL of the sequencer, without trailing slash.
    pub sequencer_url: String,
    /// Interactions requested per page.
    pub page_limit: u32,
    /// Upper bound on pages followed in one load.
    pub max_pages: usize,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            sequencer_url: "https://gw.warp.cc".to_string(),
            page_limit: 5000,
            max_pages: 10_000,
        }
    }
}

impl SequencerConfig {
    pub fn with_url(sequencer_url: impl Into<String>) -> Self {
        Self {
            sequencer_url: sequencer_url.into(),
            ..Default::default()
        }
    }

    pub fn interactions_url(&self) -> String {
        format!(
            "{}/gateway/v2/interactions-sort-key",
            self.sequencer_url.trim_end_matches('/')
        )
    }
}
