//! Scripted upstream responses shared by the integration tests.

use serde_json::{json, Value};
use shared_http::HttpResponse;

pub const GATEWAY: &str = "http://gateway.test";
pub const SEQUENCER: &str = "http://sequencer.test";

pub fn interactions_url() -> String {
    format!("{SEQUENCER}/gateway/v2/interactions-sort-key")
}

pub fn graphql_url() -> String {
    format!("{GATEWAY}/graphql")
}

/// Sort key of the `index`-th interaction at `height`.
pub fn sort_key(height: u64, index: u64) -> String {
    format!("{height:012},{},{index:04x}", 1_694_181_441_000u64 + index)
}

/// Wire interaction carrying `Input = {"function": <function>}` plus `extra_tags`.
pub fn wire_interaction(id: &str, height: u64, index: u64, function: &str, extra_tags: Value) -> Value {
    let mut tags = vec![json!({
        "name": "Input",
        "value": json!({"function": function}).to_string()
    })];
    if let Value::Array(extra) = extra_tags {
        tags.extend(extra);
    }
    json!({"interaction": {
        "id": id,
        "tags": tags,
        "block": {"id": height.to_string(), "height": height, "timestamp": 1_694_181_441u64},
        "sortKey": sort_key(height, index),
    }})
}

/// One sequencer page. `interactions` must already be in wire (descending) order.
pub fn sequencer_page(page: u64, pages: u64, interactions: Vec<Value>) -> HttpResponse {
    HttpResponse::json_ok(&json!({
        "paging": {"page": page, "pages": pages, "limit": interactions.len()},
        "interactions": interactions,
    }))
}

/// GraphQL response holding one transaction node.
pub fn transaction_node(id: &str, owner: &str, tags: Value) -> HttpResponse {
    HttpResponse::json_ok(&json!({
        "data": {"transactions": {"edges": [{"node": {
            "id": id,
            "anchor": "anchor-1",
            "signature": "sig-1",
            "owner": {"address": owner},
            "tags": tags,
            "block": {"id": "1257294", "height": "1257294", "timestamp": 1_694_181_441u64}
        }}]}}
    }))
}
