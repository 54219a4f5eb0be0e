use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::CompletionClient;
use crate::error::{AIError, OpenAIError};
use crate::prompts::ChatMessage;

/// A canned reply for `MockClient`.
#[derive(Debug, Clone, PartialEq)]
pub enum MockResponse {
    Text(String),
    RateLimit,
    Authentication,
    Http(String),
    Api(String),
}

impl MockResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    fn into_result(self) -> Result<String, AIError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::RateLimit => Err(AIError::OpenAI(OpenAIError::RateLimit)),
            Self::Authentication => Err(AIError::OpenAI(OpenAIError::Authentication)),
            Self::Http(msg) => Err(AIError::OpenAI(OpenAIError::Http(msg))),
            Self::Api(msg) => Err(AIError::OpenAI(OpenAIError::Api(msg))),
        }
    }
}

/// One recorded `complete` call.
#[derive(Debug, Clone, PartialEq)]
pub struct MockCall {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Shared control surface for a `MockClient`: queue replies, inspect calls.
#[derive(Debug, Default)]
pub struct MockHandle {
    responses: Mutex<VecDeque<MockResponse>>,
    calls: Mutex<Vec<MockCall>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockHandle {
    pub fn push(&self, response: MockResponse) {
        lock(&self.responses).push_back(response);
    }

    pub fn calls(&self) -> Vec<MockCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn remaining(&self) -> usize {
        lock(&self.responses).len()
    }
}

/// Mock client that replays queued responses in order and records every call.
#[derive(Debug, Clone)]
pub struct MockClient {
    handle: Arc<MockHandle>,
}

impl MockClient {
    pub fn new() -> (Self, Arc<MockHandle>) {
        Self::with_responses(Vec::new())
    }

    pub fn with_responses(responses: Vec<MockResponse>) -> (Self, Arc<MockHandle>) {
        let handle = Arc::new(MockHandle {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        });
        (Self { handle: handle.clone() }, handle)
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    async fn complete(&self, messages: &[ChatMessage], model: &str) -> Result<String, AIError> {
        lock(&self.handle.calls).push(MockCall {
            model: model.to_string(),
            messages: messages.to_vec(),
        });
        let next = lock(&self.handle.responses).pop_front();
        match next {
            Some(response) => response.into_result(),
            None => Err(AIError::Mock("No mock response queued".to_string())),
        }
    }

    fn clone_box(&self) -> Box<dyn CompletionClient> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_in_order_then_reports_exhaustion() {
        let (client, handle) = MockClient::with_responses(vec![MockResponse::text("first")]);
        handle.push(MockResponse::text("second"));

        let messages = [ChatMessage::user("hi")];
        assert_eq!(client.complete(&messages, "m").await.unwrap(), "first");
        assert_eq!(client.complete(&messages, "m").await.unwrap(), "second");
        assert!(matches!(client.complete(&messages, "m").await, Err(AIError::Mock(_))));
        assert_eq!(handle.call_count(), 3);
        assert_eq!(handle.remaining(), 0);
    }
}
