//! OpenRouter chat-completions backend (secondary).

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::GenerationBackend;
use crate::{PostcraftError, Result};

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "mistralai/mistral-small-3.2-24b-instruct:free";

const SYSTEM_PROMPT: &str = "You are a professional LinkedIn content creator. Create engaging, \
                             authentic posts that drive engagement and provide value to the audience.";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 300;

/// Client for the chat-completions-style API.
///
/// Sends `{model, messages, max_tokens, temperature}` with a bearer token
/// and reads `choices[0].message.content`.
pub struct OpenRouterBackend {
    api_key: String,
    model: String,
    base_url: String,
    timeout: u64,
    http: reqwest::Client,
}

impl OpenRouterBackend {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: OPENROUTER_API_URL.to_string(),
            timeout: 30,
            http: reqwest::Client::new(),
        }
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the per-request timeout in seconds.
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl GenerationBackend for OpenRouterBackend {
    fn name(&self) -> &'static str {
        "openrouter"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: SYSTEM_PROMPT },
                ChatMessage { role: "user", content: prompt },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        debug!(model = %self.model, "OpenRouter chat request");

        let response = self
            .http
            .post(&url)
            .timeout(Duration::from_secs(self.timeout))
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", "https://openrouter.ai/")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PostcraftError::Timeout { timeout: self.timeout }
                } else {
                    PostcraftError::Http(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(PostcraftError::Backend {
                backend: "openrouter",
                reason: format!("{}: {}", status, error_text),
            });
        }

        let parsed: ChatResponse = response.json().await?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|text| text.trim().to_string())
            .ok_or(PostcraftError::MalformedResponse { backend: "openrouter" })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
