//! Recording transport for testing.
//!
//! This module is only available when the `test-utils` feature is enabled:
//!
//! ```toml
//! [dev-dependencies]
//! qdrant-rest = { version = "...", features = ["test-utils"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use qdrant_rest::QdrantClient;
//! use qdrant_rest::transport::mock::MockTransport;
//!
//! let transport = MockTransport::new();
//! let client = QdrantClient::from_transport(transport.clone());
//! client.list_collections().await?;
//!
//! assert_eq!(transport.requests()[0].path(), "/collections");
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::{Value, json};

use super::{ApiResponse, Request, Transport};
use crate::error::{Error, Result};

#[derive(Default)]
struct MockState {
    requests: Vec<Request>,
    replies: VecDeque<Result<ApiResponse>>,
}

/// Transport that records every request and replays queued replies.
///
/// When no reply is queued, `{"status": "ok", "result": null}` is returned.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("recorded", &self.state().requests.len())
            .finish_non_exhaustive()
    }
}

impl MockTransport {
    /// Creates an empty mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // A panicking test thread must not hide the recorded requests.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queues a successful reply.
    ///
    /// # Panics
    ///
    /// Panics if `body` is not a JSON object.
    pub fn push_response(&self, body: Value) -> &Self {
        let response = ApiResponse::try_from(body).expect("mock response must be a JSON object");
        self.state().replies.push_back(Ok(response));
        self
    }

    /// Queues a failure.
    pub fn push_error(&self, error: Error) -> &Self {
        self.state().replies.push_back(Err(error));
        self
    }

    /// Returns every request received so far.
    pub fn requests(&self) -> Vec<Request> {
        self.state().requests.clone()
    }

    /// Returns the most recent request.
    pub fn last_request(&self) -> Option<Request> {
        self.state().requests.last().cloned()
    }

    fn record(&self, request: Request) -> Result<ApiResponse> {
        let mut state = self.state();
        state.requests.push(request);

        match state.replies.pop_front() {
            Some(reply) => reply,
            None => ApiResponse::try_from(json!({"status": "ok", "result": null})),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(&self, request: Request) -> Result<ApiResponse> {
        self.record(request)
    }
}
