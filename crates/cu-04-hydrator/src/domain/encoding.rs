//! Text-safe encoding of raw transaction bytes.
//!
//! Operates on bytes as received; payloads are never decoded to text first.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Standard (padded) base64 of `bytes`.
pub fn encode_data(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode_data(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(encoded)
}
