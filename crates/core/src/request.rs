//! Generation request types.
//!
//! A [`GenerationRequest`] describes a single post to draft: either from a
//! topic or from a source article URL, with an industry, a tone, and a
//! preferred backend. Exactly one generation mode is active per request,
//! determined by the presence of `source_article_url`.

use std::str::FromStr;

/// A configured generation backend slot.
///
/// `Primary` is the hosted generateContent-style API (Gemini), `Secondary`
/// the chat-completions-style API (OpenRouter). The pipeline always tries
/// the preferred backend first and the other one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Primary,
    Secondary,
}

impl Backend {
    /// Returns the other backend slot.
    pub fn other(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::Primary
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" | "gemini" => Ok(Self::Primary),
            "secondary" | "openrouter" => Ok(Self::Secondary),
            _ => Err(format!(
                "Invalid backend: {}. Valid options: primary (gemini), secondary (openrouter)",
                s
            )),
        }
    }
}

/// A single post-drafting request.
///
/// When `source_article_url` is set the request is in article mode: the
/// article is fetched and summarized. Otherwise the request is in topic
/// mode and the post is drafted from `topic`/`industry` directly.
///
/// # Example
///
/// ```rust
/// use postcraft_core::GenerationRequest;
///
/// let request = GenerationRequest::from_topic(Some("AI adoption"), Some("finance"), "professional");
/// assert!(!request.is_article_mode());
/// ```
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Subject of the post. Falls back to a fixed default when absent.
    pub topic: Option<String>,
    /// Industry the post is aimed at. Falls back to a fixed default when absent.
    pub industry: Option<String>,
    /// Free-text tone; five known tones map to style instructions.
    pub tone: String,
    /// Article to summarize. Presence of this field selects article mode.
    pub source_article_url: Option<String>,
    /// Backend to try first.
    pub preferred_backend: Backend,
}

impl GenerationRequest {
    /// Creates a topic-mode request.
    pub fn from_topic(topic: Option<&str>, industry: Option<&str>, tone: impl Into<String>) -> Self {
        Self {
            topic: topic.map(str::to_string),
            industry: industry.map(str::to_string),
            tone: tone.into(),
            source_article_url: None,
            preferred_backend: Backend::default(),
        }
    }

    /// Creates an article-mode request for the given URL.
    pub fn from_article(url: impl Into<String>, industry: Option<&str>, tone: impl Into<String>) -> Self {
        Self {
            topic: None,
            industry: industry.map(str::to_string),
            tone: tone.into(),
            source_article_url: Some(url.into()),
            preferred_backend: Backend::default(),
        }
    }

    /// Sets the backend to try first.
    pub fn with_preferred_backend(mut self, backend: Backend) -> Self {
        self.preferred_backend = backend;
        self
    }

    /// Returns true when this request summarizes a source article.
    pub fn is_article_mode(&self) -> bool {
        self.source_article_url.is_some()
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            topic: None,
            industry: None,
            tone: "professional".to_string(),
            source_article_url: None,
            preferred_backend: Backend::default(),
        }
    }
}
