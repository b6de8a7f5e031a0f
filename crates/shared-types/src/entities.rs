//! # Core Domain Entities
//!
//! Canonical shapes for everything the data layer loads or caches.
//!
//! ## Clusters
//!
//! - **Chain**: `Block`, `Tag`
//! - **Cached records**: `Process`, `Module`
//! - **Message history**: `Interaction`, `InteractionInput`
//! - **Evaluation input**: `MessageEnvelope`, `Message`, `MessageData`, `HydratedData`

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::serde_helpers::string_or_number;
use crate::tags::{TAG_MODULE, TAG_TYPE};

// =============================================================================
// CLUSTER A: THE CHAIN
// =============================================================================

/// A name/value pair attached to a transaction.
///
/// Names are not unique within a tag list and the list order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Value of the first tag named `name`.
pub fn find_tag<'a>(tags: &'a [Tag], name: &str) -> Option<&'a str> {
    tags.iter()
        .find(|tag| tag.name == name)
        .map(|tag| tag.value.as_str())
}

/// Fold a tag list into a name → value map. Later duplicates win.
pub fn tags_to_map(tags: &[Tag]) -> HashMap<&str, &str> {
    let mut map = HashMap::with_capacity(tags.len());
    for tag in tags {
        map.insert(tag.name.as_str(), tag.value.as_str());
    }
    map
}

/// A block reference as reported by the gateway or the sequencer.
///
/// `height` and `timestamp` arrive as numbers or numeric strings and are
/// stored as `u64`. The timestamp unit is whatever the source used.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Block {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub height: u64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub timestamp: u64,
}

/// Structured owner as returned by the gateway query protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub address: String,
}

// =============================================================================
// CLUSTER B: CACHED RECORDS
// =============================================================================

/// An addressable actor instance, identified by its creating transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub id: String,
    pub signature: Option<String>,
    pub data: Option<String>,
    pub anchor: Option<String>,
    /// Flat owner address.
    pub owner: String,
    pub tags: Vec<Tag>,
    pub block: Block,
}

impl Process {
    /// Id of the module this process runs, if tagged.
    pub fn module_id(&self) -> Option<&str> {
        find_tag(&self.tags, TAG_MODULE)
    }

    /// Value of the `Type` tag.
    pub fn record_type(&self) -> Option<&str> {
        find_tag(&self.tags, TAG_TYPE)
    }
}

/// The executable artifact a process runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub owner: String,
    pub tags: Vec<Tag>,
}

impl Module {
    /// Protocol tags from [`crate::tags::MODULE_TAGS`] this module lacks.
    pub fn missing_protocol_tags(&self) -> Vec<&'static str> {
        crate::tags::MODULE_TAGS
            .iter()
            .copied()
            .filter(|name| find_tag(&self.tags, name).is_none())
            .collect()
    }
}

// =============================================================================
// CLUSTER C: MESSAGE HISTORY
// =============================================================================

/// Decoded `Input` tag of an interaction.
///
/// `function` is the action discriminator; every other field is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionInput {
    pub function: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A unit of input addressed to a process, ordered by `sort_key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub tags: Vec<Tag>,
    pub block: Block,
    #[serde(rename = "sortKey")]
    pub sort_key: String,
    pub input: InteractionInput,
}

// =============================================================================
// CLUSTER D: EVALUATION INPUT
// =============================================================================

/// Payload resolved from a referenced transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydratedData {
    pub id: String,
    pub anchor: Option<String>,
    /// Flat owner address.
    pub owner: String,
    pub tags: Vec<Tag>,
    /// Base64 of the raw transaction bytes.
    pub data: String,
}

/// The `data` field of a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageData {
    Hydrated(HydratedData),
    Raw(Value),
}

impl Default for MessageData {
    fn default() -> Self {
        MessageData::Raw(Value::Null)
    }
}

/// A message as seen by the evaluation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub data: MessageData,
    /// Every other message field, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Message {
    pub fn tag(&self, name: &str) -> Option<&str> {
        find_tag(&self.tags, name)
    }
}

/// Wrapper the evaluation engine iterates over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEnvelope {
    pub message: Message,
    /// Sibling fields of `message` (sort key, block, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MessageEnvelope {
    pub fn new(message: Message) -> Self {
        Self {
            message,
            extra: Map::new(),
        }
    }
}

impl From<Interaction> for MessageEnvelope {
    fn from(interaction: Interaction) -> Self {
        let mut extra = Map::new();
        extra.insert("sortKey".to_string(), Value::String(interaction.sort_key));
        extra.insert(
            "block".to_string(),
            serde_json::to_value(&interaction.block).unwrap_or(Value::Null),
        );

        let data = serde_json::to_value(&interaction.input).unwrap_or(Value::Null);

        MessageEnvelope {
            message: Message {
                id: interaction.id,
                tags: interaction.tags,
                data: MessageData::Raw(data),
                extra: Map::new(),
            },
            extra,
        }
    }
}
