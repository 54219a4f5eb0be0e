//! Core completion API: the low-level client seam plus the `Assistant` that
//! turns a feature task into one completion call.
//!
//! - Implement `CompletionClient` for a new backend (see `clients::openai`).
//! - Use `Assistant::run` or one of the task helpers (`generate_mcqs`,
//!   `research`, ...) from feature pages.

use crate::clients::openai::models::OpenAIModel;
use crate::error::AIError;
use crate::interceptors::Interceptor;
use crate::prompts::{ChatMessage, Task};
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Low-level chat-completion abstraction.
///
/// Implementors send the ordered message list with a model identifier and
/// return the text of the first choice.
#[async_trait]
pub trait CompletionClient: Send + Sync + Debug {
    async fn complete(&self, messages: &[ChatMessage], model: &str) -> Result<String, AIError>;

    /// Clone this client into a boxed trait object
    fn clone_box(&self) -> Box<dyn CompletionClient>;
}

impl Clone for Box<dyn CompletionClient> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[async_trait]
impl CompletionClient for Box<dyn CompletionClient> {
    async fn complete(&self, messages: &[ChatMessage], model: &str) -> Result<String, AIError> {
        self.as_ref().complete(messages, model).await
    }

    fn clone_box(&self) -> Box<dyn CompletionClient> {
        self.as_ref().clone_box()
    }
}

/// Bounded retry for transient completion failures.
///
/// The default performs a single attempt.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: usize,
    pub initial_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 0,
            initial_backoff: Duration::from_millis(500),
        }
    }
}

/// Wraps a `CompletionClient` with the configured model, retry policy and an
/// optional transcript interceptor.
#[derive(Clone)]
pub struct Assistant<C: CompletionClient> {
    client: C,
    model: OpenAIModel,
    retry: RetryConfig,
    interceptor: Option<Arc<dyn Interceptor>>,
}

impl<C: CompletionClient> Assistant<C> {
    pub fn new(client: C, model: OpenAIModel) -> Self {
        info!(model = %model.id(), "Creating new Assistant");
        Self {
            client,
            model,
            retry: RetryConfig::default(),
            interceptor: None,
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptor = Some(interceptor);
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn model(&self) -> &OpenAIModel {
        &self.model
    }

    pub fn retry(&self) -> &RetryConfig {
        &self.retry
    }

    /// Build the conversation for `task` and return the completion text.
    #[instrument(target = "knowledge_navigator::assistant", skip(self, task), fields(task = task.name(), model = %self.model.id()))]
    pub async fn run(&self, task: Task<'_>) -> Result<String, AIError> {
        let conversation = task.conversation();
        debug!(prompt_len = conversation.char_len(), "Sending completion request");

        let mut attempt = 0;
        let mut backoff = self.retry.initial_backoff;
        loop {
            match self.client.complete(conversation.messages(), self.model.id()).await {
                Ok(text) => {
                    info!(response_len = text.len(), attempt, "Completion succeeded");
                    if let Some(interceptor) = &self.interceptor {
                        if let Err(e) = interceptor.save(task.name(), &conversation, &text).await {
                            warn!(error = %e, "Failed to save completion transcript");
                        }
                    }
                    return Ok(text);
                }
                Err(e) if e.is_retryable() && attempt < self.retry.max_retries => {
                    attempt += 1;
                    warn!(error = %e, attempt, backoff_ms = backoff.as_millis() as u64, "Retrying completion");
                    tokio::time::sleep(backoff).await;
                    backoff = backoff.saturating_mul(2);
                }
                Err(e) => {
                    error!(error = %e, attempt, "Completion failed");
                    return Err(e);
                }
            }
        }
    }

    pub async fn generate_mcqs(&self, text: &str, count: u32, subject: &str) -> Result<String, AIError> {
        self.run(Task::Mcq { text, count, subject }).await
    }

    pub async fn generate_qa(&self, text: &str) -> Result<String, AIError> {
        self.run(Task::PdfQa { text }).await
    }

    pub async fn research(&self, query: &str) -> Result<String, AIError> {
        self.run(Task::Research { query }).await
    }

    pub async fn summarize(&self, text: &str) -> Result<String, AIError> {
        self.run(Task::Summary { text }).await
    }

    pub async fn evaluate(&self, text: &str) -> Result<String, AIError> {
        self.run(Task::Evaluation { text }).await
    }
}
