//! Deserialization helpers for loosely-typed upstream JSON.

use serde::{Deserialize, Deserializer};

/// Accept either a JSON string or a JSON integer and yield a `String`.
///
/// Block ids are integer-valued but some upstreams send them as numbers.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}
