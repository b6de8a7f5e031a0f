//! Configuration for the message hydrator

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HydratorConfig {
    /// Envelopes hydrated concurrently. Output order is preserved for any
    /// value; `1` hydrates strictly one at a time.
    pub max_concurrent_loads: usize,
    /// Buffer between the spawned pipeline and its consumer.
    pub channel_capacity: usize,
}

impl Default for HydratorConfig {
    fn default() -> Self {
        Self {
            max_concurrent_loads: 1,
            channel_capacity: 16,
        }
    }
}
