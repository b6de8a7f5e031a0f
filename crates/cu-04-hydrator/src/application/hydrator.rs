//! Message Hydrator Service
//!
//! Resolves `Load`-tagged messages against a [`TransactionLoader`].

use std::sync::Arc;

use futures::{Stream, StreamExt};
use shared_types::{HydratedData, MessageData, MessageEnvelope, TAG_LOAD};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, warn};

use crate::config::HydratorConfig;
use crate::domain::encoding::encode_data;
use crate::domain::errors::HydrationError;
use crate::ports::outbound::TransactionLoader;

/// Receiving end of [`MessageHydrator::spawn`].
pub type HydratedStream = ReceiverStream<Result<MessageEnvelope, HydrationError>>;

pub struct MessageHydrator {
    config: HydratorConfig,
    loader: Arc<dyn TransactionLoader>,
}

impl MessageHydrator {
    pub fn new(config: HydratorConfig, loader: Arc<dyn TransactionLoader>) -> Self {
        Self { config, loader }
    }

    /// Hydrate a single envelope.
    ///
    /// Envelopes without a `Load` tag come back unchanged. Metadata and
    /// data of the referenced transaction are fetched concurrently.
    pub async fn hydrate_envelope(
        &self,
        mut envelope: MessageEnvelope,
    ) -> Result<MessageEnvelope, HydrationError> {
        let Some(reference) = envelope.message.tag(TAG_LOAD).map(str::to_owned) else {
            return Ok(envelope);
        };

        let message_id = envelope.message.id.clone();
        if reference.is_empty() {
            return Err(HydrationError::EmptyReference { message_id });
        }

        debug!(message_id = ?message_id, reference = %reference, "Hydrating message");

        let meta = async {
            self.loader
                .load_transaction_meta(&reference)
                .await
                .map_err(|source| HydrationError::Meta {
                    message_id: message_id.clone(),
                    reference: reference.clone(),
                    source,
                })
        };
        let data = async {
            self.loader
                .load_transaction_data(&reference)
                .await
                .map_err(|source| HydrationError::Data {
                    message_id: message_id.clone(),
                    reference: reference.clone(),
                    source,
                })
        };
        let (meta, response) = futures::try_join!(meta, data)?;

        if !response.is_success() {
            return Err(HydrationError::DataStatus {
                reference,
                status: response.status,
            });
        }

        let owner = meta
            .owner
            .map(|owner| owner.address)
            .ok_or_else(|| HydrationError::MissingOwner {
                reference: reference.clone(),
            })?;

        envelope.message.data = MessageData::Hydrated(HydratedData {
            id: meta.id,
            anchor: meta.anchor,
            owner,
            tags: meta.tags,
            data: encode_data(&response.body),
        });

        Ok(envelope)
    }

    /// Lazily hydrate `messages`, preserving order and length.
    ///
    /// Up to `max_concurrent_loads` envelopes are in flight; nothing is
    /// fetched until the returned stream is polled.
    pub fn hydrate<'a, S>(
        &'a self,
        messages: S,
    ) -> impl Stream<Item = Result<MessageEnvelope, HydrationError>> + Send + 'a
    where
        S: Stream<Item = MessageEnvelope> + Send + 'a,
    {
        messages
            .map(move |envelope| self.hydrate_envelope(envelope))
            .buffered(self.config.max_concurrent_loads.max(1))
    }

    /// Hydrate `messages` on a background task.
    ///
    /// The task stops pulling input as soon as the returned stream is
    /// dropped.
    pub fn spawn<S>(self: Arc<Self>, messages: S) -> HydratedStream
    where
        S: Stream<Item = MessageEnvelope> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(self.config.channel_capacity.max(1));

        tokio::spawn(async move {
            let hydrated = self.hydrate(messages);
            futures::pin_mut!(hydrated);

            loop {
                let next = tokio::select! {
                    _ = tx.closed() => {
                        debug!("Hydration consumer closed");
                        break;
                    }
                    next = hydrated.next() => next,
                };

                let Some(item) = next else { break };
                if let Err(error) = &item {
                    warn!(error = %error, "Hydration failed");
                }
                if tx.send(item).await.is_err() {
                    debug!("Hydration consumer closed");
                    break;
                }
            }
        });

        ReceiverStream::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::encoding::decode_data;
    use async_trait::async_trait;
    use cu_02_gateway::{GatewayError, TransactionNode};
    use futures::stream;
    use parking_lot::Mutex;
    use serde_json::json;
    use shared_http::HttpResponse;
    use shared_types::{Message, Owner, Tag};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct MockLoader {
        transactions: Mutex<HashMap<String, (TransactionNode, Vec<u8>)>>,
        delays: Mutex<HashMap<String, Duration>>,
        statuses: Mutex<HashMap<String, u16>>,
        meta_calls: AtomicUsize,
        data_calls: AtomicUsize,
        serve_any: bool,
    }

    impl MockLoader {
        fn with(self, id: &str, owner: &str, bytes: &[u8]) -> Self {
            let node = TransactionNode {
                id: id.to_string(),
                anchor: Some("a".into()),
                signature: None,
                owner: Some(Owner {
                    address: owner.to_string(),
                }),
                tags: vec![Tag::new("Content-Type", "text/plain")],
                block: None,
            };
            self.transactions
                .lock()
                .insert(id.to_string(), (node, bytes.to_vec()));
            self
        }

        fn with_status(self, id: &str, status: u16) -> Self {
            self.statuses.lock().insert(id.to_string(), status);
            self
        }

        fn delayed(self, id: &str, delay: Duration) -> Self {
            self.delays.lock().insert(id.to_string(), delay);
            self
        }

        fn lookup(&self, id: &str) -> Option<(TransactionNode, Vec<u8>)> {
            if let Some(found) = self.transactions.lock().get(id).cloned() {
                return Some(found);
            }
            self.serve_any.then(|| {
                let node = TransactionNode {
                    id: id.to_string(),
                    anchor: None,
                    signature: None,
                    owner: Some(Owner {
                        address: "any".into(),
                    }),
                    tags: vec![],
                    block: None,
                };
                (node, id.as_bytes().to_vec())
            })
        }

        async fn pause(&self, id: &str) {
            let delay = self.delays.lock().get(id).copied();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
        }
    }

    #[async_trait]
    impl TransactionLoader for MockLoader {
        async fn load_transaction_meta(&self, id: &str) -> Result<TransactionNode, GatewayError> {
            self.meta_calls.fetch_add(1, Ordering::SeqCst);
            self.pause(id).await;
            self.lookup(id)
                .map(|(node, _)| node)
                .ok_or_else(|| GatewayError::NotFound(id.to_string()))
        }

        async fn load_transaction_data(&self, id: &str) -> Result<HttpResponse, GatewayError> {
            self.data_calls.fetch_add(1, Ordering::SeqCst);
            self.pause(id).await;
            let status = self.statuses.lock().get(id).copied().unwrap_or(200);
            Ok(match self.lookup(id) {
                Some((_, bytes)) => HttpResponse::new(status, bytes),
                None => HttpResponse::new(404, "not found"),
            })
        }
    }

    fn envelope(id: &str, tags: Vec<Tag>, data: serde_json::Value) -> MessageEnvelope {
        MessageEnvelope::new(Message {
            id: Some(id.to_string()),
            tags,
            data: MessageData::Raw(data),
            extra: Default::default(),
        })
    }

    fn hydrator(loader: Arc<MockLoader>, concurrency: usize) -> MessageHydrator {
        let config = HydratorConfig {
            max_concurrent_loads: concurrency,
            channel_capacity: 1,
        };
        MessageHydrator::new(config, loader)
    }

    #[tokio::test]
    async fn test_hydrates_only_load_tagged_messages() {
        let loader = Arc::new(MockLoader::default().with("X", "own", b"Hello World"));
        let hydrator = hydrator(loader.clone(), 1);

        let input = vec![
            envelope("A", vec![], json!("d1")),
            envelope("B", vec![Tag::new("Load", "X")], json!(null)),
            envelope("C", vec![Tag::new("Foo", "Bar")], json!("d3")),
        ];

        let output: Vec<_> = hydrator
            .hydrate(stream::iter(input.clone()))
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(output.len(), 3);
        assert_eq!(output[0], input[0]);
        assert_eq!(output[2], input[2]);

        let MessageData::Hydrated(data) = &output[1].message.data else {
            panic!("B was not hydrated");
        };
        assert_eq!(data.id, "X");
        assert_eq!(data.anchor.as_deref(), Some("a"));
        assert_eq!(data.owner, "own");
        assert_eq!(data.tags, vec![Tag::new("Content-Type", "text/plain")]);
        assert_eq!(data.data, "SGVsbG8gV29ybGQ=");
        assert_eq!(output[1].message.tags, input[1].message.tags);

        assert_eq!(loader.meta_calls.load(Ordering::SeqCst), 1);
        assert_eq!(loader.data_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_hydrated_owner_is_flat_string() {
        let loader = Arc::new(MockLoader::default().with("X", "own", b"x"));
        let hydrated = hydrator(loader, 1)
            .hydrate_envelope(envelope("B", vec![Tag::new("Load", "X")], json!(null)))
            .await
            .unwrap();

        let value = serde_json::to_value(&hydrated).unwrap();
        assert_eq!(value["message"]["data"]["owner"], json!("own"));
    }

    #[tokio::test]
    async fn test_multibyte_payload_survives_encoding() {
        let text = "héllo wörld ✓ 日本語 🚀";
        let loader = Arc::new(MockLoader::default().with("X", "own", text.as_bytes()));
        let hydrated = hydrator(loader, 1)
            .hydrate_envelope(envelope("B", vec![Tag::new("Load", "X")], json!(null)))
            .await
            .unwrap();

        let MessageData::Hydrated(data) = hydrated.message.data else {
            panic!("not hydrated");
        };
        assert_eq!(decode_data(&data.data).unwrap(), text.as_bytes());
    }

    #[tokio::test]
    async fn test_missing_reference_fails_in_place() {
        let loader = Arc::new(MockLoader::default());
        let hydrator = hydrator(loader, 1);

        let input = vec![
            envelope("A", vec![], json!("d1")),
            envelope("B", vec![Tag::new("Load", "missing")], json!(null)),
        ];
        let output: Vec<_> = hydrator.hydrate(stream::iter(input)).collect().await;

        assert_eq!(output.len(), 2);
        assert!(output[0].is_ok());
        assert!(matches!(
            &output[1],
            Err(HydrationError::Meta { reference, message_id, .. })
                if reference == "missing" && message_id.as_deref() == Some("B")
        ));
    }

    #[tokio::test]
    async fn test_non_2xx_data_is_a_status_error() {
        let loader = Arc::new(
            MockLoader::default()
                .with("X", "owner", b"upstream down")
                .with_status("X", 503),
        );
        let result = hydrator(loader.clone(), 1)
            .hydrate_envelope(envelope("B", vec![Tag::new("Load", "X")], json!(null)))
            .await;

        assert!(matches!(
            result,
            Err(HydrationError::DataStatus { ref reference, status: 503 }) if reference == "X"
        ));
        assert_eq!(loader.data_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_load_tag_is_rejected() {
        let loader = Arc::new(MockLoader::default());
        let result = hydrator(loader.clone(), 1)
            .hydrate_envelope(envelope("B", vec![Tag::new("Load", "")], json!(null)))
            .await;

        assert!(matches!(result, Err(HydrationError::EmptyReference { .. })));
        assert_eq!(loader.meta_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_loads_preserve_order() {
        let loader = Arc::new(
            MockLoader::default()
                .with("T0", "o", b"0")
                .with("T1", "o", b"1")
                .with("T2", "o", b"2")
                .delayed("T0", Duration::from_millis(300))
                .delayed("T1", Duration::from_millis(200))
                .delayed("T2", Duration::from_millis(100)),
        );
        let hydrator = hydrator(loader, 4);

        let input: Vec<_> = (0..3)
            .map(|i| envelope(&format!("M{i}"), vec![Tag::new("Load", format!("T{i}"))], json!(null)))
            .collect();
        let output: Vec<_> = hydrator.hydrate(stream::iter(input)).collect().await;

        let ids: Vec<_> = output
            .into_iter()
            .map(|item| item.unwrap().message.id.unwrap())
            .collect();
        assert_eq!(ids, vec!["M0", "M1", "M2"]);
    }

    #[tokio::test]
    async fn test_lazy_stream_fetches_only_what_is_pulled() {
        let loader = Arc::new(MockLoader {
            serve_any: true,
            ..Default::default()
        });
        let hydrator = hydrator(loader.clone(), 1);

        let source = stream::iter(0..).map(|i| {
            envelope(&format!("M{i}"), vec![Tag::new("Load", format!("T{i}"))], json!(null))
        });
        let first: Vec<_> = hydrator.hydrate(source).take(2).collect().await;

        assert_eq!(first.len(), 2);
        assert_eq!(loader.meta_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_spawned_pipeline_stops_when_consumer_drops() {
        let loader = Arc::new(MockLoader {
            serve_any: true,
            ..Default::default()
        });
        let hydrator = Arc::new(hydrator(loader.clone(), 1));

        let source = stream::iter(0..).map(|i| {
            envelope(&format!("M{i}"), vec![Tag::new("Load", format!("T{i}"))], json!(null))
        });
        let mut hydrated = hydrator.spawn(source);

        for _ in 0..2 {
            assert!(hydrated.next().await.unwrap().is_ok());
        }
        drop(hydrated);

        tokio::time::sleep(Duration::from_millis(50)).await;
        let after_drop = loader.meta_calls.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(loader.meta_calls.load(Ordering::SeqCst), after_drop);
        assert!(after_drop <= 5, "producer ran ahead: {after_drop}");
    }

    #[tokio::test]
    async fn test_spawned_pipeline_yields_everything_in_order() {
        let loader = Arc::new(MockLoader::default().with("X", "own", b"payload"));
        let hydrator = Arc::new(hydrator(loader, 2));

        let input = vec![
            envelope("A", vec![], json!("d1")),
            envelope("B", vec![Tag::new("Load", "X")], json!(null)),
            envelope("C", vec![], json!("d3")),
        ];
        let output: Vec<_> = hydrator.spawn(stream::iter(input)).collect().await;

        let ids: Vec<_> = output
            .into_iter()
            .map(|item| item.unwrap().message.id.unwrap())
            .collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }
}
