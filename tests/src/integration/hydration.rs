//! # Hydration Flow
//!
//! Sequencer interactions become envelopes; envelopes tagged `Load` get the
//! referenced transaction's payload from the gateway. Order and length are
//! preserved end to end.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cu_01_sort_key::SortKeyBounds;
    use cu_02_gateway::{GatewayClient, GatewayConfig};
    use cu_03_sequencer::{LoadInteractionsRequest, SequencerApi, SequencerClient, SequencerConfig};
    use cu_04_hydrator::{
        decode_data, GatewayTransactionLoader, HydrationError, HydratorConfig, MessageHydrator,
    };
    use futures::{stream, StreamExt};
    use serde_json::json;
    use shared_http::{HttpMethod, HttpResponse, MockTransport};
    use shared_types::{Message, MessageData, MessageEnvelope, Tag};

    use crate::fixtures::{
        graphql_url, interactions_url, sequencer_page, transaction_node, wire_interaction, GATEWAY,
        SEQUENCER,
    };

    fn hydrator(mock: &MockTransport, concurrency: usize) -> Arc<MessageHydrator> {
        let gateway = Arc::new(GatewayClient::new(
            GatewayConfig::with_url(GATEWAY),
            Arc::new(mock.clone()),
        ));
        Arc::new(MessageHydrator::new(
            HydratorConfig {
                max_concurrent_loads: concurrency,
                ..HydratorConfig::default()
            },
            Arc::new(GatewayTransactionLoader::new(gateway)),
        ))
    }

    fn message(id: &str, tags: Vec<Tag>, data: serde_json::Value) -> MessageEnvelope {
        MessageEnvelope::new(Message {
            id: Some(id.to_string()),
            tags,
            data: MessageData::Raw(data),
            extra: Default::default(),
        })
    }

    #[tokio::test]
    async fn test_only_the_load_tagged_message_is_rewritten() {
        let mock = MockTransport::new();
        mock.respond(
            HttpMethod::Post,
            graphql_url(),
            transaction_node("X", "own", json!([{"name": "Content-Type", "value": "text/plain"}])),
        );
        mock.respond(
            HttpMethod::Get,
            format!("{GATEWAY}/X"),
            HttpResponse::new(200, "Hello World"),
        );

        let input = vec![
            message("A", vec![], json!("d1")),
            message("B", vec![Tag::new("Load", "X")], json!(null)),
            message("C", vec![Tag::new("Foo", "Bar")], json!("d3")),
        ];

        let output: Vec<MessageEnvelope> = hydrator(&mock, 1)
            .hydrate(stream::iter(input.clone()))
            .map(|item| item.unwrap())
            .collect()
            .await;

        assert_eq!(output.len(), 3);
        assert_eq!(output[0], input[0]);
        assert_eq!(output[2], input[2]);

        let MessageData::Hydrated(data) = &output[1].message.data else {
            panic!("B was not hydrated");
        };
        assert_eq!(data.id, "X");
        assert_eq!(data.owner, "own");
        assert_eq!(data.anchor.as_deref(), Some("anchor-1"));
        assert_eq!(data.data, "SGVsbG8gV29ybGQ=");

        // one metadata query and one data fetch
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn test_binary_payload_is_encoded_from_raw_bytes() {
        let payload: Vec<u8> = "日本語 ✓".bytes().chain([0xff, 0x00, 0xfe]).collect();
        let mock = MockTransport::new();
        mock.respond(HttpMethod::Post, graphql_url(), transaction_node("X", "own", json!([])));
        mock.respond(
            HttpMethod::Get,
            format!("{GATEWAY}/X"),
            HttpResponse::new(200, payload.clone()),
        );

        let hydrated = hydrator(&mock, 1)
            .hydrate_envelope(message("B", vec![Tag::new("Load", "X")], json!(null)))
            .await
            .unwrap();

        let MessageData::Hydrated(data) = hydrated.message.data else {
            panic!("not hydrated");
        };
        assert_eq!(decode_data(&data.data).unwrap(), payload);
    }

    #[tokio::test]
    async fn test_failed_data_fetch_surfaces_in_place() {
        let mock = MockTransport::new();
        mock.respond(HttpMethod::Post, graphql_url(), transaction_node("X", "own", json!([])));
        mock.respond(
            HttpMethod::Get,
            format!("{GATEWAY}/X"),
            HttpResponse::new(502, "bad gateway"),
        );

        let input = vec![
            message("A", vec![], json!("d1")),
            message("B", vec![Tag::new("Load", "X")], json!(null)),
            message("C", vec![], json!("d3")),
        ];
        let output: Vec<_> = hydrator(&mock, 1).hydrate(stream::iter(input)).collect().await;

        assert_eq!(output.len(), 3);
        assert!(output[0].is_ok());
        assert!(matches!(
            output[1],
            Err(HydrationError::DataStatus { ref reference, status: 502 }) if reference == "X"
        ));
        assert!(output[2].is_ok());
    }

    #[tokio::test]
    async fn test_sequencer_history_flows_into_hydrated_stream() {
        let mock = MockTransport::new();
        mock.respond(
            HttpMethod::Get,
            interactions_url(),
            sequencer_page(
                1,
                2,
                vec![
                    wire_interaction("tx-3", 12, 3, "eval", json!([])),
                    wire_interaction("tx-2", 11, 2, "eval", json!([{"name": "Load", "value": "X"}])),
                ],
            ),
        );
        mock.respond(
            HttpMethod::Get,
            interactions_url(),
            sequencer_page(2, 2, vec![wire_interaction("tx-1", 10, 1, "spawn", json!([]))]),
        );
        mock.respond(HttpMethod::Post, graphql_url(), transaction_node("X", "own", json!([])));
        mock.respond(
            HttpMethod::Get,
            format!("{GATEWAY}/X"),
            HttpResponse::new(200, "payload"),
        );

        let sequencer = SequencerClient::new(
            SequencerConfig::with_url(SEQUENCER),
            Arc::new(mock.clone()),
        );
        let interactions = sequencer
            .load_interactions(&LoadInteractionsRequest::new("proc-1", SortKeyBounds::unbounded()))
            .await
            .unwrap();

        let envelopes = stream::iter(interactions.into_iter().map(MessageEnvelope::from));
        let output: Vec<MessageEnvelope> = hydrator(&mock, 2)
            .spawn(envelopes)
            .map(|item| item.unwrap())
            .collect()
            .await;

        let ids: Vec<_> = output
            .iter()
            .map(|e| e.message.id.clone().unwrap())
            .collect();
        assert_eq!(ids, vec!["tx-1", "tx-2", "tx-3"]);

        assert_eq!(
            output[0].message.data,
            MessageData::Raw(json!({"function": "spawn"}))
        );
        assert!(matches!(output[1].message.data, MessageData::Hydrated(_)));
        assert!(output[0].extra.contains_key("sortKey"));
        assert_eq!(output[2].extra["block"]["height"], json!(12));
    }
}
