//! Pipeline integration tests over mock backends and extractors.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use postcraft_core::*;

/// Backend returning a fixed outcome and counting invocations.
struct CountingBackend {
    name: &'static str,
    reply: Option<String>,
    calls: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl CountingBackend {
    fn succeeding(name: &'static str, reply: &str) -> (Self, Arc<AtomicUsize>, Arc<Mutex<Vec<String>>>) {
        Self::build(name, Some(reply.to_string()))
    }

    fn failing(name: &'static str) -> (Self, Arc<AtomicUsize>, Arc<Mutex<Vec<String>>>) {
        Self::build(name, None)
    }

    fn build(
        name: &'static str,
        reply: Option<String>,
    ) -> (Self, Arc<AtomicUsize>, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let backend = Self { name, reply, calls: calls.clone(), prompts: prompts.clone() };
        (backend, calls, prompts)
    }
}

#[async_trait]
impl GenerationBackend for CountingBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(PostcraftError::Backend {
            backend: self.name,
            reason: "simulated outage".to_string(),
        })
    }
}

/// Extractor returning a fixed article.
struct StaticExtractor(ArticleExtract);

#[async_trait]
impl ArticleExtractor for StaticExtractor {
    async fn extract(&self, _url: &str) -> Result<ArticleExtract> {
        Ok(self.0.clone())
    }
}

/// Extractor simulating a network failure.
struct FailingExtractor;

#[async_trait]
impl ArticleExtractor for FailingExtractor {
    async fn extract(&self, url: &str) -> Result<ArticleExtract> {
        Err(PostcraftError::ExtractionFailed(format!("connection refused: {url}")))
    }
}

#[tokio::test]
async fn secondary_never_invoked_when_primary_succeeds() {
    let (primary, _, _) = CountingBackend::succeeding("gemini", "hello");
    let (secondary, secondary_calls, _) = CountingBackend::failing("openrouter");

    let pipeline = GenerationPipeline::new(
        Box::new(primary),
        Box::new(secondary),
        Box::new(FailingExtractor),
        ExhaustionPolicy::Error,
    );

    let request = GenerationRequest::default();
    let post = pipeline.generate(&request).await.unwrap();
    assert!(post.starts_with("hello"));
    assert_eq!(secondary_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn secondary_invoked_exactly_once_after_primary_failure() {
    let (primary, primary_calls, _) = CountingBackend::failing("gemini");
    let (secondary, secondary_calls, _) = CountingBackend::succeeding("openrouter", "rescued");

    let pipeline = GenerationPipeline::new(
        Box::new(primary),
        Box::new(secondary),
        Box::new(FailingExtractor),
        ExhaustionPolicy::Error,
    );

    let post = pipeline.generate(&GenerationRequest::default()).await.unwrap();
    assert!(post.starts_with("rescued"));
    assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
    assert_eq!(secondary_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn canned_fallback_never_raises_and_mentions_inputs() {
    let (primary, _, _) = CountingBackend::failing("gemini");
    let (secondary, _, _) = CountingBackend::failing("openrouter");

    let pipeline = GenerationPipeline::new(
        Box::new(primary),
        Box::new(secondary),
        Box::new(FailingExtractor),
        ExhaustionPolicy::CannedFallback,
    )
    .with_picker(Box::new(Fixed(0)));

    let request = GenerationRequest::from_topic(Some("supply chains"), Some("finance"), "casual");
    let post = pipeline.generate(&request).await.unwrap();

    assert!(post.contains("supply chains"));
    assert!(post.contains("finance"));
    assert!(emoji_count(&post) >= 2);
    assert!(hashtag_count(&post) >= 3);
}

#[tokio::test]
async fn finance_scenario_decorates_primary_reply() {
    // Primary returns one emoji and no hashtags: one finance emoji is added
    // on the same line, three finance hashtags on a new line.
    let (primary, _, _) = CountingBackend::succeeding("gemini", "📈 AI is reshaping finance.");
    let (secondary, secondary_calls, _) = CountingBackend::failing("openrouter");

    let pipeline = GenerationPipeline::new(
        Box::new(primary),
        Box::new(secondary),
        Box::new(FailingExtractor),
        ExhaustionPolicy::Error,
    );

    let request =
        GenerationRequest::from_topic(Some("AI adoption"), Some("finance"), "professional");
    let post = pipeline.generate(&request).await.unwrap();

    assert!(post.contains("📈 AI is reshaping finance."));
    assert_eq!(secondary_calls.load(Ordering::SeqCst), 0);
    assert_eq!(emoji_count(&post), 2);

    let hashtag_line = post.lines().last().unwrap();
    assert_eq!(hashtag_count(hashtag_line), 3);
    assert!(hashtag_line.contains("#Finance"));
}

#[tokio::test]
async fn extraction_failure_degrades_to_url_prompt() {
    let (primary, _, prompts) = CountingBackend::succeeding("gemini", "summary post");
    let (secondary, _, _) = CountingBackend::failing("openrouter");

    let pipeline = GenerationPipeline::new(
        Box::new(primary),
        Box::new(secondary),
        Box::new(FailingExtractor),
        ExhaustionPolicy::Error,
    );

    let url = "https://example.com/deep-dive";
    let request = GenerationRequest::from_article(url, Some("technology"), "professional");
    pipeline.generate(&request).await.unwrap();

    let seen = prompts.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].contains("Summarize the main points of this article"));
    assert!(seen[0].contains(url));
    assert!(!seen[0].contains("Title:"));
    assert!(!seen[0].contains("Content:"));
}

#[tokio::test]
async fn extraction_success_builds_article_prompt() {
    let extract = ArticleExtract::new(
        "Rust at Scale",
        "Body paragraph about adopting Rust in production systems.",
        "https://example.com/rust-at-scale",
    );
    let (primary, _, prompts) = CountingBackend::succeeding("gemini", "article post");
    let (secondary, _, _) = CountingBackend::failing("openrouter");

    let pipeline = GenerationPipeline::new(
        Box::new(primary),
        Box::new(secondary),
        Box::new(StaticExtractor(extract)),
        ExhaustionPolicy::Error,
    );

    let request = GenerationRequest::from_article(
        "https://example.com/rust-at-scale",
        Some("technology"),
        "educational",
    );
    pipeline.generate(&request).await.unwrap();

    let seen = prompts.lock().unwrap();
    assert!(seen[0].contains("Title: Rust at Scale"));
    assert!(seen[0].contains("URL: https://example.com/rust-at-scale"));
    assert!(seen[0].contains("adopting Rust in production"));
}

#[tokio::test]
async fn preferred_secondary_reverses_order() {
    let (primary, primary_calls, _) = CountingBackend::succeeding("gemini", "primary post");
    let (secondary, _, _) = CountingBackend::succeeding("openrouter", "secondary post");

    let pipeline = GenerationPipeline::new(
        Box::new(primary),
        Box::new(secondary),
        Box::new(FailingExtractor),
        ExhaustionPolicy::Error,
    );

    let request = GenerationRequest::default().with_preferred_backend(Backend::Secondary);
    let post = pipeline.generate(&request).await.unwrap();

    assert!(post.starts_with("secondary post"));
    assert_eq!(primary_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn canned_fallback_rotates_templates() {
    let run = |picker: usize| async move {
        let (primary, _, _) = CountingBackend::failing("gemini");
        let (secondary, _, _) = CountingBackend::failing("openrouter");
        let pipeline = GenerationPipeline::new(
            Box::new(primary),
            Box::new(secondary),
            Box::new(FailingExtractor),
            ExhaustionPolicy::CannedFallback,
        )
        .with_picker(Box::new(Fixed(picker)));
        pipeline
            .generate(&GenerationRequest::from_topic(Some("launch"), Some("marketing"), "casual"))
            .await
            .unwrap()
    };

    let first = run(0).await;
    let second = run(1).await;
    assert_ne!(first, second);
}
