//! Content-generation pipeline with backend fallback.
//!
//! The pipeline is the main entry point of this crate. It turns a
//! [`GenerationRequest`] into a finished post string: build one prompt,
//! try the preferred backend then the other, and pass the winning text
//! through post-processing. If every backend fails it either surfaces
//! [`crate::PostcraftError::PipelineExhausted`] or synthesizes a canned
//! post, depending on the configured [`ExhaustionPolicy`].
//!
//! # Example
//!
//! ```rust,no_run
//! use postcraft_core::{GenerationPipeline, GenerationRequest, PipelineConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PipelineConfig::builder()
//!     .gemini_api_key("...")
//!     .openrouter_api_key("...")
//!     .build();
//! let pipeline = GenerationPipeline::from_config(config);
//!
//! let request = GenerationRequest::from_topic(Some("AI adoption"), Some("finance"), "professional");
//! let post = pipeline.generate(&request).await?;
//! println!("{post}");
//! # Ok(())
//! # }
//! ```

use tracing::{debug, warn};

use crate::article::{ArticleExtractor, PageExtractor};
use crate::backends::{GeminiBackend, GenerationBackend, OpenRouterBackend, gemini, openrouter};
use crate::canned::{IndexPicker, RoundRobin, canned_post};
use crate::fetch::FetchConfig;
use crate::postprocess::normalize;
use crate::prompt::{
    DEFAULT_INDUSTRY, DEFAULT_TOPIC, build_article_prompt, build_degraded_prompt, build_topic_prompt,
};
use crate::request::{Backend, GenerationRequest};
use crate::{PostcraftError, Result};

/// Behavior when every backend has failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExhaustionPolicy {
    /// Surface a `PipelineExhausted` error to the caller.
    #[default]
    Error,
    /// Synthesize a local canned post instead of failing.
    CannedFallback,
}

/// Configuration for building a pipeline against the hosted backends.
///
/// All state is explicit and call-scoped; there is no process-wide
/// configuration. API keys are plain strings so the binaries decide where
/// they come from.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// API key for the primary (Gemini) backend.
    pub gemini_api_key: String,
    /// API key for the secondary (OpenRouter) backend.
    pub openrouter_api_key: String,
    /// Model id for the primary backend.
    pub gemini_model: String,
    /// Model id for the secondary backend.
    pub openrouter_model: String,
    /// Per-call timeout in seconds, shared by backends and the extractor.
    pub timeout: u64,
    /// What to do when both backends fail.
    pub exhaustion_policy: ExhaustionPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            openrouter_api_key: String::new(),
            gemini_model: gemini::DEFAULT_MODEL.to_string(),
            openrouter_model: openrouter::DEFAULT_MODEL.to_string(),
            timeout: 30,
            exhaustion_policy: ExhaustionPolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// Creates a new builder for PipelineConfig.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::new()
    }
}

/// Builder for [`PipelineConfig`].
///
/// # Example
///
/// ```rust
/// use postcraft_core::{ExhaustionPolicy, PipelineConfig};
///
/// let config = PipelineConfig::builder()
///     .gemini_api_key("key-a")
///     .openrouter_api_key("key-b")
///     .timeout(10)
///     .exhaustion_policy(ExhaustionPolicy::CannedFallback)
///     .build();
/// assert_eq!(config.timeout, 10);
/// ```
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: PipelineConfig::default() }
    }

    /// Sets the primary backend API key.
    pub fn gemini_api_key(mut self, value: impl Into<String>) -> Self {
        self.config.gemini_api_key = value.into();
        self
    }

    /// Sets the secondary backend API key.
    pub fn openrouter_api_key(mut self, value: impl Into<String>) -> Self {
        self.config.openrouter_api_key = value.into();
        self
    }

    /// Sets the primary backend model id.
    pub fn gemini_model(mut self, value: impl Into<String>) -> Self {
        self.config.gemini_model = value.into();
        self
    }

    /// Sets the secondary backend model id.
    pub fn openrouter_model(mut self, value: impl Into<String>) -> Self {
        self.config.openrouter_model = value.into();
        self
    }

    /// Sets the per-call timeout in seconds.
    pub fn timeout(mut self, value: u64) -> Self {
        self.config.timeout = value;
        self
    }

    /// Sets the behavior when all backends fail.
    pub fn exhaustion_policy(mut self, value: ExhaustionPolicy) -> Self {
        self.config.exhaustion_policy = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> PipelineConfig {
        self.config
    }
}

impl Default for PipelineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Orchestrates prompt building, ranked backend calls, and post-processing.
pub struct GenerationPipeline {
    primary: Box<dyn GenerationBackend>,
    secondary: Box<dyn GenerationBackend>,
    extractor: Box<dyn ArticleExtractor>,
    policy: ExhaustionPolicy,
    picker: Box<dyn IndexPicker>,
}

impl GenerationPipeline {
    /// Builds a pipeline over the hosted Gemini and OpenRouter backends.
    pub fn from_config(config: PipelineConfig) -> Self {
        let primary = GeminiBackend::new(&config.gemini_api_key)
            .with_model(&config.gemini_model)
            .with_timeout(config.timeout);
        let secondary = OpenRouterBackend::new(&config.openrouter_api_key)
            .with_model(&config.openrouter_model)
            .with_timeout(config.timeout);
        let extractor = PageExtractor::with_fetch_config(FetchConfig {
            timeout: config.timeout,
            ..Default::default()
        });

        Self::new(
            Box::new(primary),
            Box::new(secondary),
            Box::new(extractor),
            config.exhaustion_policy,
        )
    }

    /// Builds a pipeline over arbitrary backend and extractor implementations.
    pub fn new(
        primary: Box<dyn GenerationBackend>,
        secondary: Box<dyn GenerationBackend>,
        extractor: Box<dyn ArticleExtractor>,
        policy: ExhaustionPolicy,
    ) -> Self {
        Self { primary, secondary, extractor, policy, picker: Box::new(RoundRobin::new()) }
    }

    /// Replaces the canned-template picker.
    pub fn with_picker(mut self, picker: Box<dyn IndexPicker>) -> Self {
        self.picker = picker;
        self
    }

    /// Generates a finished post for the request.
    ///
    /// Fails only when every backend has failed and the exhaustion policy
    /// is [`ExhaustionPolicy::Error`]; the error carries the last backend
    /// failure reason.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let prompt = self.build_prompt(request).await;

        let mut last_error: Option<PostcraftError> = None;
        for backend in self.backend_order(request.preferred_backend) {
            match backend.generate(&prompt).await {
                Ok(text) => {
                    debug!(backend = backend.name(), "generation succeeded");
                    return Ok(normalize(
                        &text,
                        request.topic.as_deref(),
                        request.industry.as_deref(),
                    ));
                }
                Err(e) => {
                    warn!(backend = backend.name(), error = %e, "backend failed");
                    last_error = Some(e);
                }
            }
        }

        match self.policy {
            ExhaustionPolicy::Error => Err(PostcraftError::PipelineExhausted {
                last_error: last_error
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "no backends configured".to_string()),
            }),
            ExhaustionPolicy::CannedFallback => {
                let topic = request.topic.as_deref().unwrap_or(DEFAULT_TOPIC);
                let industry = request.industry.as_deref().unwrap_or(DEFAULT_INDUSTRY);
                debug!("all backends failed, using canned fallback");
                let text = canned_post(topic, industry, self.picker.as_ref());
                Ok(normalize(&text, Some(topic), Some(industry)))
            }
        }
    }

    /// Builds the single prompt for this request.
    ///
    /// Extraction failure in article mode degrades to a summarize-this-URL
    /// prompt; it never aborts the request.
    async fn build_prompt(&self, request: &GenerationRequest) -> String {
        match &request.source_article_url {
            Some(url) => match self.extractor.extract(url).await {
                Ok(extract) => {
                    build_article_prompt(&extract, request.industry.as_deref(), &request.tone)
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "article extraction failed, degrading to URL summary");
                    build_degraded_prompt(url, request.industry.as_deref(), &request.tone)
                }
            },
            None => build_topic_prompt(
                request.topic.as_deref(),
                request.industry.as_deref(),
                &request.tone,
            ),
        }
    }

    fn backend_order(&self, preferred: Backend) -> [&dyn GenerationBackend; 2] {
        match preferred {
            Backend::Primary => [self.primary.as_ref(), self.secondary.as_ref()],
            Backend::Secondary => [self.secondary.as_ref(), self.primary.as_ref()],
        }
    }
}
