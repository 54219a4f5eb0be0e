use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

use crate::clients::openai::models::OpenAIModel;
use crate::clients::openai::{OpenAIClient, OpenAIConfig, DEFAULT_BASE_URL};
use crate::core::RetryConfig;

/// Trait for types that can retrieve their configuration key from environment variables
pub trait KeyFromEnv {
    /// The environment variable name for this client's API key
    const KEY_NAME: &'static str;

    /// Find the API key by checking the .env file and then the environment.
    /// Blank values count as missing.
    fn find_key() -> Option<String> {
        // First try to load .env file (silently fail if not found)
        let _ = dotenvy::dotenv();

        env::var(Self::KEY_NAME)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

/// Show only the first and last four characters of a secret.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 8), tail)
}

/// What `check_env` reports: the loaded line plus the masked key, or the
/// error line when no key is set.
pub fn credential_report(key: Option<&str>) -> Result<String, String> {
    match key {
        Some(key) => Ok(format!("OpenAI API key loaded successfully\n{}", mask_key(key))),
        None => Err("Error: OpenAI API key not found".to_string()),
    }
}

pub const MODEL_VAR: &str = "NAVIGATOR_MODEL";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const OUTPUT_DIR_VAR: &str = "NAVIGATOR_OUTPUT_DIR";
pub const TRANSCRIPT_DIR_VAR: &str = "NAVIGATOR_TRANSCRIPT_DIR";
pub const TIMEOUT_VAR: &str = "NAVIGATOR_TIMEOUT_SECS";
pub const MAX_RETRIES_VAR: &str = "NAVIGATOR_MAX_RETRIES";

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct NavigatorConfig {
    pub api_key: Option<String>,
    pub model: OpenAIModel,
    pub base_url: String,
    /// Where rendered charts and concept maps are written.
    pub output_dir: PathBuf,
    /// When set, every completion is saved here as Markdown.
    pub transcript_dir: Option<PathBuf>,
    pub timeout: Duration,
    pub retry: RetryConfig,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: OpenAIModel::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("navigator-output"),
            transcript_dir: None,
            timeout: Duration::from_secs(60),
            retry: RetryConfig::default(),
        }
    }
}

impl NavigatorConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let retry = RetryConfig {
            max_retries: parse_var(MAX_RETRIES_VAR, defaults.retry.max_retries),
            ..defaults.retry
        };
        Self {
            api_key: OpenAIClient::find_key(),
            model: non_empty_var(MODEL_VAR)
                .map(|id| OpenAIModel::from_id(&id))
                .unwrap_or(defaults.model),
            base_url: non_empty_var(BASE_URL_VAR).unwrap_or(defaults.base_url),
            output_dir: non_empty_var(OUTPUT_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            transcript_dir: non_empty_var(TRANSCRIPT_DIR_VAR).map(PathBuf::from),
            timeout: Duration::from_secs(parse_var(TIMEOUT_VAR, defaults.timeout.as_secs())),
            retry,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn openai_config(&self) -> OpenAIConfig {
        OpenAIConfig {
            api_key: self.api_key.clone().unwrap_or_default(),
            base_url: self.base_url.clone(),
            timeout: self.timeout,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr + Copy>(name: &str, default: T) -> T {
    match non_empty_var(name) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(var = name, value = %raw, "Ignoring unparsable configuration value");
            default
        }),
        None => default,
    }
}
