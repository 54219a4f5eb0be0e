pub mod models;

use crate::config::KeyFromEnv;
use crate::core::CompletionClient;
use crate::error::{AIError, OpenAIError};
use crate::prompts::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Configuration for the OpenAI chat-completions client
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub base_url: String,
    /// Zero means requests never time out.
    pub timeout: Duration,
}

impl OpenAIConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        Some(self.timeout).filter(|t| !t.is_zero())
    }
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: OpenAIClient::find_key().unwrap_or_default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Clone, Debug)]
pub struct OpenAIClient {
    config: OpenAIConfig,
    http: Client,
}

impl KeyFromEnv for OpenAIClient {
    const KEY_NAME: &'static str = "OPENAI_API_KEY";
}

impl OpenAIClient {
    pub fn new(config: OpenAIConfig) -> Result<Self, AIError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AIError::OpenAI(OpenAIError::Http(e.to_string())))?;
        info!(base_url = %config.base_url, timeout_secs = config.timeout.as_secs(), "Creating new OpenAI client");
        Ok(Self { config, http })
    }

    pub fn has_credential(&self) -> bool {
        !self.config.api_key.trim().is_empty()
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    fn request_body<'a>(model: &'a str, messages: &'a [ChatMessage]) -> ChatRequest<'a> {
        ChatRequest { model, messages }
    }
}

#[async_trait]
impl CompletionClient for OpenAIClient {
    #[instrument(skip(self, messages), fields(model = %model, message_count = messages.len()))]
    async fn complete(&self, messages: &[ChatMessage], model: &str) -> Result<String, AIError> {
        if !self.has_credential() {
            error!("No OpenAI API key configured");
            return Err(AIError::OpenAI(OpenAIError::Authentication));
        }

        let body = Self::request_body(model, messages);
        debug!(endpoint = %self.endpoint(), "Sending request to OpenAI API");
        let resp = self.http
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, timeout = e.is_timeout(), "HTTP request failed");
                AIError::OpenAI(OpenAIError::Http(e.to_string()))
            })?;

        debug!(status = %resp.status(), "Received response from OpenAI API");

        if resp.status() == 401 {
            error!("OpenAI API authentication failed");
            return Err(AIError::OpenAI(OpenAIError::Authentication));
        }
        if resp.status() == 429 {
            warn!("OpenAI API rate limit exceeded");
            return Err(AIError::OpenAI(OpenAIError::RateLimit));
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let txt = resp.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %txt, "OpenAI API error");
            return Err(AIError::OpenAI(OpenAIError::Api(txt)));
        }

        let parsed: ChatResponse = resp.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse OpenAI response JSON");
            AIError::OpenAI(OpenAIError::Http(e.to_string()))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                error!("No content in OpenAI response");
                AIError::OpenAI(OpenAIError::Api("No choices in response".to_string()))
            })
    }

    fn clone_box(&self) -> Box<dyn CompletionClient> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: &str) -> OpenAIConfig {
        OpenAIConfig {
            api_key: api_key.to_string(),
            base_url: "http://127.0.0.1:9/v1/".to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn body_carries_model_and_ordered_messages() {
        let messages = vec![ChatMessage::system("persona"), ChatMessage::user("instruction")];
        let body = serde_json::to_value(OpenAIClient::request_body("gpt-4o", &messages)).unwrap();
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "instruction");
    }

    #[test]
    fn endpoint_joins_base_url_without_double_slash() {
        let client = OpenAIClient::new(config("k")).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/v1/chat/completions");
    }

    #[test]
    fn zero_timeout_means_no_timeout() {
        let mut cfg = config("k");
        assert_eq!(cfg.request_timeout(), Some(Duration::from_secs(1)));
        cfg.timeout = Duration::ZERO;
        assert_eq!(cfg.request_timeout(), None);
        assert!(OpenAIClient::new(cfg).is_ok());
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let client = OpenAIClient::new(config("  ")).unwrap();
        assert!(!client.has_credential());
        let err = client
            .complete(&[ChatMessage::user("hi")], "gpt-4o")
            .await
            .unwrap_err();
        assert!(matches!(err, AIError::OpenAI(OpenAIError::Authentication)));
    }
}
