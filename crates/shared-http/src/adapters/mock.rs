//! # Mock Transport
//!
//! Scripted transport for tests. Replies are queued per `(method, url)`;
//! the last queued reply for a route repeats once the queue drains.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::errors::TransportError;
use crate::ports::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

#[derive(Debug, Clone)]
enum Reply {
    Response(HttpResponse),
    Unreachable,
}

#[derive(Debug, Default)]
struct Inner {
    routes: HashMap<(HttpMethod, String), VecDeque<Reply>>,
    requests: Vec<HttpRequest>,
}

/// In-memory [`HttpTransport`] recording every request it receives.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<Inner>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `method url`.
    pub fn respond(&self, method: HttpMethod, url: impl Into<String>, response: HttpResponse) {
        self.push(method, url.into(), Reply::Response(response));
    }

    /// Queue a connection failure for `method url`.
    pub fn fail(&self, method: HttpMethod, url: impl Into<String>) {
        self.push(method, url.into(), Reply::Unreachable);
    }

    fn push(&self, method: HttpMethod, url: String, reply: Reply) {
        self.inner
            .lock()
            .routes
            .entry((method, url))
            .or_default()
            .push_back(reply);
    }

    /// All requests sent so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.lock().requests.len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut inner = self.inner.lock();
        let key = (request.method, request.url.clone());
        inner.requests.push(request);

        let reply = match inner.routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };

        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Unreachable) => Err(TransportError::Connection {
                url: key.1,
                reason: "mock: unreachable".to_string(),
            }),
            None => Ok(HttpResponse::new(404, "mock: no route")),
        }
    }
}
