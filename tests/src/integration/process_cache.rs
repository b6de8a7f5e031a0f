//! # Process Cache Flow
//!
//! The runtime loads process and module metadata from the gateway once,
//! writes it through to SQLite, and serves later loads from the cache, also
//! across a restart.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cu_05_process_cache::ProcessCacheApi;
    use cu_runtime::{CuConfig, SubsystemContainer};
    use futures::StreamExt;
    use serde_json::json;
    use shared_http::{HttpMethod, HttpResponse, MockTransport};
    use shared_types::MessageData;

    use crate::fixtures::{
        graphql_url, interactions_url, sequencer_page, transaction_node, wire_interaction, GATEWAY,
        SEQUENCER,
    };

    fn container(dir: &tempfile::TempDir, mock: &MockTransport) -> SubsystemContainer {
        let config = CuConfig {
            gateway_url: GATEWAY.to_string(),
            sequencer_url: SEQUENCER.to_string(),
            db_path: dir.path().join("cu.sqlite"),
            ..CuConfig::default()
        };
        SubsystemContainer::with_transport(config, Arc::new(mock.clone()))
    }

    fn process_tags() -> serde_json::Value {
        json!([
            {"name": "Data-Protocol", "value": "ao"},
            {"name": "Type", "value": "Process"},
            {"name": "Module", "value": "module-1"}
        ])
    }

    #[tokio::test]
    async fn test_process_survives_restart_without_refetch() {
        let dir = tempfile::tempdir().unwrap();

        let first_mock = MockTransport::new();
        first_mock.respond(
            HttpMethod::Post,
            graphql_url(),
            transaction_node("proc-1", "owner-1", process_tags()),
        );
        let loaded = container(&dir, &first_mock)
            .process_loader()
            .await
            .unwrap()
            .load_process("proc-1")
            .await
            .unwrap();
        assert_eq!(loaded.block.height, 1_257_294);
        assert_eq!(first_mock.request_count(), 1);

        let second_mock = MockTransport::new();
        let reloaded = container(&dir, &second_mock)
            .process_loader()
            .await
            .unwrap()
            .load_process("proc-1")
            .await
            .unwrap();

        assert_eq!(reloaded, loaded);
        assert_eq!(second_mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_module_is_written_through() {
        let dir = tempfile::tempdir().unwrap();
        let mock = MockTransport::new();
        mock.respond(
            HttpMethod::Post,
            graphql_url(),
            transaction_node(
                "module-1",
                "owner-1",
                json!([
                    {"name": "Type", "value": "Module"},
                    {"name": "Module-Format", "value": "wasm32-unknown-emscripten"}
                ]),
            ),
        );

        let container = container(&dir, &mock);
        let module = container
            .process_loader()
            .await
            .unwrap()
            .load_module("module-1")
            .await
            .unwrap();

        let cache = container.cache.get().await.unwrap();
        assert_eq!(cache.find_module("module-1").await.unwrap(), Some(module));
    }

    #[tokio::test]
    async fn test_blocks_are_fetched_then_cached() {
        let dir = tempfile::tempdir().unwrap();
        let mock = MockTransport::new();
        mock.respond(
            HttpMethod::Post,
            graphql_url(),
            HttpResponse::json_ok(&json!({
                "data": {"blocks": {
                    "pageInfo": {"hasNextPage": false},
                    "edges": [
                        {"cursor": "c1", "node": {"id": "20", "height": 20, "timestamp": 200}},
                        {"cursor": "c2", "node": {"id": "21", "height": 21, "timestamp": 210}}
                    ]
                }}
            })),
        );

        let loader = container(&dir, &mock).process_loader().await.unwrap();
        let fetched = loader.load_blocks(20, 21).await.unwrap();
        assert_eq!(fetched.len(), 2);
        assert_eq!(mock.request_count(), 1);

        let cached = loader.load_blocks(20, 21).await.unwrap();
        assert_eq!(cached, fetched);
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_runtime_message_stream() {
        let dir = tempfile::tempdir().unwrap();
        let mock = MockTransport::new();
        mock.respond(
            HttpMethod::Get,
            interactions_url(),
            sequencer_page(
                1,
                1,
                vec![
                    wire_interaction("tx-2", 6, 2, "eval", json!([])),
                    wire_interaction("tx-1", 5, 1, "eval", json!([])),
                ],
            ),
        );

        let loader = container(&dir, &mock).process_loader().await.unwrap();
        let messages: Vec<_> = loader
            .load_messages("proc-1", Some("5"), Some("6"))
            .await
            .unwrap()
            .collect()
            .await;

        assert_eq!(messages.len(), 2);
        for item in &messages {
            let envelope = item.as_ref().unwrap();
            assert_eq!(envelope.message.data, MessageData::Raw(json!({"function": "eval"})));
        }

        let request = &mock.requests()[0];
        assert_eq!(request.query_param("from"), Some("000000000005"));
        assert_eq!(request.query_param("to"), Some("000000000007"));
    }
}
