//! Hosted text-generation backends.
//!
//! Each backend is a thin HTTPS client over one provider's generation API.
//! Both implement [`GenerationBackend`], the seam the pipeline calls
//! through; tests substitute their own implementations.

use async_trait::async_trait;

use crate::Result;

pub mod gemini;
pub mod openrouter;

pub use gemini::GeminiBackend;
pub use openrouter::OpenRouterBackend;

/// A hosted text-generation endpoint.
///
/// `generate` performs one blocking HTTPS call and either returns the
/// generated text or an error. No retries happen at this layer; the
/// pipeline handles fallback across backends.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Short provider name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Generates text for the prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
