//! # GraphQL Wire Shapes
//!
//! Queries sent to the gateway and the envelopes expected back. Decoding
//! goes through [`decode_envelope`], which turns GraphQL `errors` and a
//! missing `data` member into typed failures.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use shared_types::{Block, Owner, Tag};

use crate::domain::errors::GatewayError;

/// Metadata query for a set of transaction ids.
pub const TRANSACTIONS_QUERY: &str = r#"query GetTransactions ($ids: [ID!]!) {
  transactions(ids: $ids) {
    edges {
      node {
        id
        anchor
        signature
        owner { address }
        tags { name value }
        block { id height timestamp }
      }
    }
  }
}"#;

/// Block metadata query over a height range, cursor paged.
pub const BLOCKS_QUERY: &str = r#"query GetBlocks ($min: Int, $max: Int, $limit: Int, $cursor: String) {
  blocks(height: { min: $min, max: $max }, first: $limit, after: $cursor, sort: HEIGHT_ASC) {
    pageInfo { hasNextPage }
    edges {
      cursor
      node { id height timestamp }
    }
  }
}"#;

pub fn transactions_request(ids: &[&str]) -> serde_json::Value {
    json!({ "query": TRANSACTIONS_QUERY, "variables": { "ids": ids } })
}

pub fn blocks_request(min: u64, max: u64, limit: u32, cursor: Option<&str>) -> serde_json::Value {
    json!({
        "query": BLOCKS_QUERY,
        "variables": { "min": min, "max": max, "limit": limit, "cursor": cursor }
    })
}

/// A transaction node as returned by `transactions(ids:)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionNode {
    pub id: String,
    #[serde(default)]
    pub anchor: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub owner: Option<Owner>,
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub block: Option<Block>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlEnvelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlErrorEntry {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
}

#[derive(Debug, Deserialize)]
pub struct Edge<N> {
    #[serde(default)]
    pub cursor: Option<String>,
    pub node: N,
}

#[derive(Debug, Deserialize)]
pub struct Connection<N> {
    #[serde(rename = "pageInfo", default)]
    pub page_info: Option<PageInfo>,
    pub edges: Vec<Edge<N>>,
}

#[derive(Debug, Deserialize)]
pub struct TransactionsData {
    pub transactions: Connection<TransactionNode>,
}

#[derive(Debug, Deserialize)]
pub struct BlocksData {
    pub blocks: Connection<Block>,
}

/// Decode a GraphQL response body into its `data` member.
pub fn decode_envelope<T: DeserializeOwned>(
    body: &[u8],
    operation: &'static str,
    id: &str,
) -> Result<T, GatewayError> {
    let envelope: GraphqlEnvelope<T> =
        serde_json::from_slice(body).map_err(|e| GatewayError::Shape {
            operation,
            id: id.to_string(),
            reason: e.to_string(),
        })?;

    if !envelope.errors.is_empty() {
        let message = envelope
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(GatewayError::Graphql {
            operation,
            id: id.to_string(),
            message,
        });
    }

    envelope.data.ok_or_else(|| GatewayError::Shape {
        operation,
        id: id.to_string(),
        reason: "missing data".to_string(),
    })
}
