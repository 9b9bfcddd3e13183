//! Mock completion client for testing
//!
//! Provides a configurable in-memory implementation of the
//! `CompletionClient` port. Replies are served in FIFO order and
//! every received prompt is recorded for later inspection.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::ports::{CompletionClient, CompletionError, PromptMessage};

/// A scripted reply served by the mock client.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Resolve the request with the given assistant text.
    Text(String),
    /// Fail the request with the given error.
    Failure(CompletionError),
}

/// Mock implementation of `CompletionClient` for testing.
///
/// Replies are queued with [`with_reply`](Self::with_reply) and
/// [`with_failure`](Self::with_failure) and consumed in order. Once the
/// queue is exhausted the client falls back to a generic success reply.
/// An optional delay simulates network latency, which tests use to
/// observe in-flight state.
#[derive(Debug, Clone)]
pub struct MockCompletionClient {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<Vec<PromptMessage>>>>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Text(text.into()));
        self
    }

    /// Queue a failed request.
    pub fn with_failure(self, error: CompletionError) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Failure(error));
        self
    }

    /// Delay every request by the given duration before settling.
    pub fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All prompts received so far, in request order.
    pub fn calls(&self) -> Vec<Vec<PromptMessage>> {
        self.calls.lock().unwrap().clone()
    }

    fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockReply::Text("Mock response".to_string()))
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, prompt: Vec<PromptMessage>) -> Result<String, CompletionError> {
        self.calls.lock().unwrap().push(prompt);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match self.next_reply() {
            MockReply::Text(text) => Ok(text),
            MockReply::Failure(error) => Err(error),
        }
    }
}
