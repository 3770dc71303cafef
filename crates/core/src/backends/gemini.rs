//! Gemini generateContent backend (primary).

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::GenerationBackend;
use crate::{PostcraftError, Result};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 400;

/// Client for the hosted generateContent API.
///
/// Sends `{contents:[{parts:[{text}]}], generationConfig:{...}}` and reads
/// `candidates[0].content.parts[0].text`; any other response shape or a
/// non-success status is a failure the pipeline falls through on.
pub struct GeminiBackend {
    api_key: String,
    model: String,
    base_url: String,
    timeout: u64,
    http: reqwest::Client,
}

impl GeminiBackend {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_URL.to_string(),
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
impl GenerationBackend for GeminiBackend {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request = GenerateRequest {
            contents: vec![Content { parts: vec![Part { text: prompt }] }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        debug!(model = %self.model, "Gemini generate request");

        let response = self
            .http
            .post(&url)
            .timeout(Duration::from_secs(self.timeout))
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
                backend: "gemini",
                reason: format!("{}: {}", status, error_text),
            });
        }

        let parsed: GenerateResponse = response.json().await?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text.trim().to_string())
            .ok_or(PostcraftError::MalformedResponse { backend: "gemini" })
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateRequest {
            contents: vec![Content { parts: vec![Part { text: "hello" }] }],
            generation_config: GenerationConfig { temperature: 0.7, max_output_tokens: 400 },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 400);
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"📈 AI is reshaping finance.  "}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text.trim().to_string());
        assert_eq!(text.as_deref(), Some("📈 AI is reshaping finance."));
    }

    #[test]
    fn test_empty_candidates_is_malformed() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(parsed.candidates.is_empty());

        let missing: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.candidates.is_empty());
    }

    #[test]
    fn test_builder_defaults() {
        let backend = GeminiBackend::new("key");
        assert_eq!(backend.model, DEFAULT_MODEL);
        assert_eq!(backend.timeout, 30);
    }
}
