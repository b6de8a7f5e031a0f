//! # Sequencer Pagination Flow
//!
//! The sequencer returns each page newest-first; the client must walk every
//! page and hand back the whole history oldest-first.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cu_01_sort_key::{SortKey, SortKeyBounds};
    use cu_03_sequencer::{LoadInteractionsRequest, SequencerApi, SequencerClient, SequencerConfig};
    use serde_json::{json, Value};
    use shared_http::{HttpMethod, MockTransport};

    use crate::fixtures::{interactions_url, sequencer_page, wire_interaction, SEQUENCER};

    fn client(mock: &MockTransport, page_limit: u32) -> SequencerClient {
        let config = SequencerConfig {
            page_limit,
            ..SequencerConfig::with_url(SEQUENCER)
        };
        SequencerClient::new(config, Arc::new(mock.clone()))
    }

    /// `count` interactions spread over pages of `per_page`, in wire order.
    fn script_pages(mock: &MockTransport, count: u64, per_page: u64) {
        let pages = count.div_ceil(per_page);
        let mut remaining: Vec<Value> = (0..count)
            .rev()
            .map(|i| wire_interaction(&format!("tx-{i}"), 1_000 + i, i, "transfer", json!([])))
            .collect();

        for page in 1..=pages {
            let take = remaining.len().min(per_page as usize);
            let chunk: Vec<Value> = remaining.drain(..take).collect();
            mock.respond(HttpMethod::Get, interactions_url(), sequencer_page(page, pages, chunk));
        }
    }

    #[tokio::test]
    async fn test_full_history_is_ascending_across_pages() {
        let mock = MockTransport::new();
        script_pages(&mock, 10, 4);

        let interactions = client(&mock, 4)
            .load_interactions(&LoadInteractionsRequest::new("proc-1", SortKeyBounds::unbounded()))
            .await
            .unwrap();

        assert_eq!(interactions.len(), 10);
        assert_eq!(mock.request_count(), 3);

        let keys: Vec<SortKey> = interactions
            .iter()
            .map(|i| i.sort_key.parse().unwrap())
            .collect();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(interactions.first().unwrap().id.as_deref(), Some("tx-0"));
        assert_eq!(interactions.last().unwrap().id.as_deref(), Some("tx-9"));
    }

    #[tokio::test]
    async fn test_every_page_request_carries_the_same_bounds() {
        let mock = MockTransport::new();
        script_pages(&mock, 6, 2);

        client(&mock, 2)
            .load_interactions(&LoadInteractionsRequest::new(
                "proc-1",
                SortKeyBounds::new(Some("1000"), Some("1257294")),
            ))
            .await
            .unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 3);
        for (index, request) in requests.iter().enumerate() {
            assert_eq!(request.query_param("contractId"), Some("proc-1"));
            assert_eq!(request.query_param("from"), Some("000000001000"));
            assert_eq!(request.query_param("to"), Some("000001257295"));
            assert_eq!(request.query_param("limit"), Some("2"));
            assert_eq!(request.query_param("page"), Some((index + 1).to_string().as_str()));
        }
    }

    #[tokio::test]
    async fn test_empty_history() {
        let mock = MockTransport::new();
        mock.respond(HttpMethod::Get, interactions_url(), sequencer_page(1, 1, vec![]));

        let interactions = client(&mock, 10)
            .load_interactions(&LoadInteractionsRequest::new("proc-1", SortKeyBounds::unbounded()))
            .await
            .unwrap();

        assert!(interactions.is_empty());
        assert_eq!(mock.request_count(), 1);
    }
}
