//! Article extraction for article-mode requests.
//!
//! This module defines the [`ArticleExtract`] value the prompt builder
//! consumes, the [`ArticleExtractor`] seam the pipeline calls through, and
//! [`PageExtractor`], the shipped implementation that fetches a page and
//! pulls a title and body text out of its HTML.
//!
//! Extraction failure is never fatal to a request: the pipeline degrades to
//! a summarize-this-URL prompt instead.

use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::fetch::{FetchConfig, fetch_url};
use crate::{PostcraftError, Result};

/// Maximum number of body characters kept in an extract.
pub const BODY_CHAR_LIMIT: usize = 2000;

/// Title used when a page carries none.
const FALLBACK_TITLE: &str = "Article";

/// A call-scoped summary of a fetched article.
///
/// Produced by an [`ArticleExtractor`], consumed by the article prompt
/// builder, never persisted.
#[derive(Debug, Clone)]
pub struct ArticleExtract {
    /// Page title, or `"Article"` when the page has none.
    pub title: String,
    /// Readable body text, truncated to [`BODY_CHAR_LIMIT`] characters.
    pub body_text: String,
    /// The URL the article was fetched from.
    pub source_url: String,
}

impl ArticleExtract {
    /// Creates an extract, truncating the body to [`BODY_CHAR_LIMIT`] characters.
    pub fn new(title: impl Into<String>, body_text: &str, source_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body_text: body_text.chars().take(BODY_CHAR_LIMIT).collect(),
            source_url: source_url.into(),
        }
    }
}

/// Narrow contract the pipeline depends on for article mode.
///
/// Implementations fetch and distill a page into an [`ArticleExtract`].
/// The pipeline treats any error as a signal to degrade, not to abort.
#[async_trait]
pub trait ArticleExtractor: Send + Sync {
    async fn extract(&self, url: &str) -> Result<ArticleExtract>;
}

/// Extractor that fetches a page over HTTP and reads title and paragraph
/// text from its HTML.
///
/// # Example
///
/// ```rust,no_run
/// use postcraft_core::{ArticleExtractor, PageExtractor};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let extractor = PageExtractor::new();
/// let extract = extractor.extract("https://example.com/article").await?;
/// println!("Title: {}", extract.title);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PageExtractor {
    fetch: FetchConfig,
}

impl PageExtractor {
    /// Creates an extractor with default fetch settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with custom fetch settings.
    pub fn with_fetch_config(fetch: FetchConfig) -> Self {
        Self { fetch }
    }

    fn parse(html: &str, url: &str) -> Result<ArticleExtract> {
        let doc = Html::parse_document(html);

        let title = extract_title(&doc).unwrap_or_else(|| FALLBACK_TITLE.to_string());
        let body = extract_body_text(&doc);

        if body.trim().is_empty() {
            return Err(PostcraftError::ExtractionFailed(format!(
                "no readable text found at {}",
                url
            )));
        }

        Ok(ArticleExtract::new(title, body.trim(), url))
    }
}

#[async_trait]
impl ArticleExtractor for PageExtractor {
    async fn extract(&self, url: &str) -> Result<ArticleExtract> {
        let html = fetch_url(url, &self.fetch).await?;
        Self::parse(&html, url)
    }
}

/// Reads the page title, preferring `og:title` over the `<title>` element.
fn extract_title(doc: &Html) -> Option<String> {
    let og_selector = Selector::parse(r#"meta[property="og:title"]"#).ok()?;
    if let Some(meta) = doc.select(&og_selector).next() {
        if let Some(content) = meta.value().attr("content") {
            let content = content.trim();
            if !content.is_empty() {
                return Some(content.to_string());
            }
        }
    }

    let title_selector = Selector::parse("title").ok()?;
    let title = doc.select(&title_selector).next()?;
    let text = title.text().collect::<String>().trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}

/// Collects paragraph text, preferring paragraphs inside an `<article>`
/// element when one exists.
fn extract_body_text(doc: &Html) -> String {
    for selector in ["article p", "main p", "p"] {
        let Ok(selector) = Selector::parse(selector) else {
            continue;
        };
        let paragraphs: Vec<String> = doc
            .select(&selector)
            .map(|p| p.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if !paragraphs.is_empty() {
            return paragraphs.join("\n\n");
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_truncates_body() {
        let extract = ArticleExtract::new("T", &"y".repeat(5000), "https://example.com");
        assert_eq!(extract.body_text.chars().count(), BODY_CHAR_LIMIT);
    }

    #[test]
    fn test_parse_prefers_article_paragraphs() {
        let html = r#"
            <html><head><title>Page Title</title></head>
            <body>
                <p>Navigation junk</p>
                <article><p>Real content here.</p><p>Second paragraph.</p></article>
            </body></html>
        "#;
        let extract = PageExtractor::parse(html, "https://example.com/a").unwrap();
        assert_eq!(extract.title, "Page Title");
        assert!(extract.body_text.contains("Real content here."));
        assert!(extract.body_text.contains("Second paragraph."));
        assert!(!extract.body_text.contains("Navigation junk"));
    }

    #[test]
    fn test_parse_og_title_wins() {
        let html = r#"
            <html><head>
                <title>Boring Title</title>
                <meta property="og:title" content="Social Title">
            </head><body><p>Body text.</p></body></html>
        "#;
        let extract = PageExtractor::parse(html, "https://example.com/b").unwrap();
        assert_eq!(extract.title, "Social Title");
    }

    #[test]
    fn test_parse_missing_title_falls_back() {
        let html = "<html><body><p>Only a paragraph.</p></body></html>";
        let extract = PageExtractor::parse(html, "https://example.com/c").unwrap();
        assert_eq!(extract.title, "Article");
    }

    #[test]
    fn test_parse_empty_page_fails() {
        let html = "<html><body><div>no paragraphs</div></body></html>";
        let result = PageExtractor::parse(html, "https://example.com/d");
        assert!(matches!(result, Err(PostcraftError::ExtractionFailed(_))));
    }
}
