//! Interaction input decoding.

use serde_json::Value;
use shared_types::{tags_to_map, Interaction, InteractionInput, TAG_INPUT};

use crate::domain::errors::SequencerError;
use crate::domain::wire::WireInteraction;

/// Decode the `Input` tag of `wire` and build the canonical interaction.
///
/// Tags are folded into a map, so a repeated `Input` tag resolves to its
/// last occurrence. The input must be a JSON object with a string
/// `function` field.
pub fn decode_interaction(
    process_id: &str,
    wire: WireInteraction,
) -> Result<Interaction, SequencerError> {
    let decode_err = |reason: String| SequencerError::Decode {
        process_id: process_id.to_string(),
        sort_key: wire.sort_key.clone(),
        reason,
    };

    let raw = tags_to_map(&wire.tags)
        .get(TAG_INPUT)
        .copied()
        .ok_or_else(|| decode_err("missing Input tag".to_string()))?;

    let value: Value =
        serde_json::from_str(raw).map_err(|e| decode_err(format!("Input is not JSON: {e}")))?;

    match value.get("function") {
        Some(Value::String(_)) => {}
        Some(_) => return Err(decode_err("function is not a string".to_string())),
        None => return Err(decode_err("missing function".to_string())),
    }

    let input: InteractionInput =
        serde_json::from_value(value).map_err(|e| decode_err(e.to_string()))?;

    Ok(Interaction {
        id: wire.id,
        tags: wire.tags,
        block: wire.block,
        sort_key: wire.sort_key,
        input,
    })
}
