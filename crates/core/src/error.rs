//! Error types for Postcraft operations.
//!
//! This module defines the main error type [`PostcraftError`] which represents
//! all possible errors that can occur during prompt generation, backend calls,
//! and article extraction.
//!
//! # Example
//!
//! ```rust
//! use postcraft_core::{PostcraftError, Result};
//!
//! fn check_prompt(prompt: &str) -> Result<()> {
//!     if prompt.is_empty() {
//!         return Err(PostcraftError::ExtractionFailed("empty prompt".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Main error type for content-generation operations.
///
/// This enum represents all possible errors that can occur during
/// HTTP fetching, backend generation calls, and article extraction.
///
/// Backend failures (`Backend`, `MalformedResponse`, `Http`, `Timeout`) are
/// absorbed by the pipeline until every configured backend has been tried;
/// only [`PostcraftError::PipelineExhausted`] surfaces to callers.
#[derive(Error, Debug)]
pub enum PostcraftError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other transport-level problems.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is missing a scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A generation backend returned a non-success status or API-level error.
    #[error("{backend} API error: {reason}")]
    Backend { backend: &'static str, reason: String },

    /// A generation backend responded 2xx but the expected field was missing.
    ///
    /// The pipeline treats this identically to [`PostcraftError::Backend`]:
    /// the next backend in order is tried.
    #[error("No generated text in {backend} response")]
    MalformedResponse { backend: &'static str },

    /// Article content could not be extracted from the fetched page.
    ///
    /// The pipeline absorbs this error and degrades to a summarize-this-URL
    /// prompt rather than failing the request.
    #[error("Failed to extract article content: {0}")]
    ExtractionFailed(String),

    /// Every configured backend failed.
    ///
    /// Carries the failure reason of the last backend tried. This is the
    /// only generation error that reaches callers.
    #[error("All generation backends failed (last error: {last_error})")]
    PipelineExhausted { last_error: String },
}

/// Result type alias for PostcraftError.
///
/// This is a convenience alias for `std::result::Result<T, PostcraftError>`.
pub type Result<T> = std::result::Result<T, PostcraftError>;
