//! Mock transport for testing
//!
//! Records every request it receives and replays queued responses, so tests
//! can assert on the exact method, path and body a client produced.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::Transport;
use super::request::{Request, Response};
use crate::error::{ApiError, Result};

/// Recording transport.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new()
///     .with_json(200, json!({"data": {"type": "organizations", "attributes": {"name": "acme"}}}))
///     .await;
///
/// let org = Client::with_transport(Arc::new(mock)).organizations().read("acme").await?;
/// ```
#[derive(Default)]
pub struct MockTransport {
    /// Responses replayed in order, one per call
    responses: Arc<Mutex<VecDeque<Result<Response>>>>,
    /// Captured requests for test assertions
    requests: Arc<Mutex<Vec<Request>>>,
}

impl MockTransport {
    /// Create a mock with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with a JSON body.
    pub async fn with_json(self, status: u16, body: serde_json::Value) -> Self {
        let bytes = serde_json::to_vec(&body).expect("serializable test body");
        self.responses
            .lock()
            .await
            .push_back(Ok(Response::new(status, bytes)));
        self
    }

    /// Queue a response with an empty body.
    pub async fn with_empty(self, status: u16) -> Self {
        self.responses
            .lock()
            .await
            .push_back(Ok(Response::new(status, Vec::new())));
        self
    }

    /// Queue an error.
    pub async fn with_error(self, error: ApiError) -> Self {
        self.responses.lock().await.push_back(Err(error.into()));
        self
    }

    /// All captured requests, oldest first.
    pub async fn requests(&self) -> Vec<Request> {
        self.requests.lock().await.clone()
    }

    /// Number of requests received.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: Request) -> Result<Response> {
        self.requests.lock().await.push(request);

        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| {
                Err(ApiError::InvalidResponse("no mock response queued".into()).into())
            })
    }
}
