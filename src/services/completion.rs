use std::env;
use std::error::Error;
use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// The value shipped in example configs; treated the same as no key at all.
const PLACEHOLDER_API_KEY: &str = "your-openai-api-key-here";
/// A hung upstream must not hang the request forever.
const UPSTREAM_DEADLINE_SECS: u64 = 60;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug)]
pub enum CompletionError {
    Configuration(String),
    Http(reqwest::Error),
    DeadlineExceeded(u64),
    Upstream { status: u16, body: String },
    EmptyCompletion,
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            CompletionError::Http(err) => write!(f, "HTTP error: {}", err),
            CompletionError::DeadlineExceeded(secs) => {
                write!(f, "Completion API did not respond within {}s", secs)
            }
            CompletionError::Upstream { status, body } => {
                write!(f, "Completion API error (status {}): {}", status, body)
            }
            CompletionError::EmptyCompletion => {
                write!(f, "Completion API returned an empty completion")
            }
        }
    }
}

impl Error for CompletionError {}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        CompletionError::Http(err)
    }
}

/// Thin client for an OpenAI-compatible chat-completion endpoint. Any
/// provider with the same wire shape can be substituted via
/// `OPENAI_BASE_URL`.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    base_url: String,
    model: String,
}

impl CompletionClient {
    pub fn new() -> Self {
        let base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            client: Client::new(),
            base_url,
            model,
        }
    }

    /// Point the client at a different completion provider. Tests use this
    /// to substitute a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Send one prompt to the completion API and return the completion text.
    ///
    /// The API key is read from the environment on every call rather than
    /// cached at startup, and is checked before any network I/O. There are
    /// no retries: the model is non-deterministic, so repeated calls are
    /// not idempotent and retry policy belongs to the caller.
    pub async fn complete(
        &self,
        system_instruction: &str,
        user_instruction: &str,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> Result<String, CompletionError> {
        let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() || api_key == PLACEHOLDER_API_KEY {
            return Err(CompletionError::Configuration(
                "OPENAI_API_KEY is not configured".to_string(),
            ));
        }

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_instruction.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_instruction.to_string(),
                },
            ],
            temperature,
            max_tokens,
        };

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let response = timeout(
            Duration::from_secs(UPSTREAM_DEADLINE_SECS),
            self.client
                .post(&url)
                .header("Authorization", format!("Bearer {}", api_key))
                .header("Content-Type", "application/json")
                .json(&request)
                .send(),
        )
        .await
        .map_err(|_| CompletionError::DeadlineExceeded(UPSTREAM_DEADLINE_SECS))??;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            eprintln!("Completion API error ({}): {}", status, body);
            return Err(CompletionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(CompletionError::EmptyCompletion);
        }

        Ok(content)
    }
}

impl Default for CompletionClient {
    fn default() -> Self {
        Self::new()
    }
}
