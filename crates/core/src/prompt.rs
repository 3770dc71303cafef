//! Prompt construction for the generation backends.
//!
//! All builders in this module are pure string formatting: identical inputs
//! yield byte-identical prompts, there is no I/O and no failure mode. The
//! pipeline builds one prompt per request and never mutates it afterwards.

use crate::article::ArticleExtract;

/// Topic used when the caller supplies none (or only whitespace).
pub const DEFAULT_TOPIC: &str = "latest industry trend";

/// Industry used when the caller supplies none (or only whitespace).
pub const DEFAULT_INDUSTRY: &str = "technology";

/// Maximum number of article body characters interpolated into a prompt.
pub const ARTICLE_BODY_LIMIT: usize = 1500;

/// Maps a tone name to a one-sentence style instruction.
///
/// Five tones are known; anything else falls back to a literal
/// "Use a {tone} tone." instruction so arbitrary caller input still
/// produces a usable prompt.
pub fn tone_instruction(tone: &str) -> String {
    match tone.to_lowercase().as_str() {
        "professional" => "Maintain a formal, knowledgeable, and trustworthy voice.".to_string(),
        "casual" => "Keep it light, friendly, and conversational.".to_string(),
        "enthusiastic" => "Use high energy, exclamation, and positive words.".to_string(),
        "educational" => "Break concepts down clearly, like teaching someone new.".to_string(),
        "inspirational" => "Uplift the audience with stories or visionary insights.".to_string(),
        _ => format!("Use a {} tone.", tone),
    }
}

/// Resolves an optional field to its trimmed value or a default.
fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

/// Builds the instruction prompt for a topic-mode request.
///
/// # Example
///
/// ```rust
/// use postcraft_core::build_topic_prompt;
///
/// let prompt = build_topic_prompt(Some("AI adoption"), Some("finance"), "professional");
/// assert!(prompt.contains("AI adoption"));
/// assert!(prompt.contains("finance"));
/// ```
pub fn build_topic_prompt(topic: Option<&str>, industry: Option<&str>, tone: &str) -> String {
    let topic = or_default(topic, DEFAULT_TOPIC);
    let industry = or_default(industry, DEFAULT_INDUSTRY);
    let tone_instruction = tone_instruction(tone);

    format!(
        r#"You are a LinkedIn content strategist. Create a compelling, SEO-friendly LinkedIn post about "{topic}" in the "{industry}" industry.

Requirements:
- {tone_instruction}
- Start with a bold hook (stat, quote, opinion)
- Add personal insight or storytelling
- Use emojis smartly for engagement
- End with a question or CTA
- Include 3-5 trending, industry-relevant hashtags

Example:
🚀 "Most businesses still ignore this one growth channel..."

[Share the insight or story]

What's your take on this?

#Growth #Marketing #Leadership #Career #LinkedInTips

Now write the post:"#
    )
}

/// Builds the instruction prompt for an article-mode request.
///
/// The article body is truncated to [`ARTICLE_BODY_LIMIT`] characters before
/// interpolation to bound prompt size.
pub fn build_article_prompt(article: &ArticleExtract, industry: Option<&str>, tone: &str) -> String {
    let industry = or_default(industry, DEFAULT_INDUSTRY);
    let tone_instruction = tone_instruction(tone);
    let body: String = article.body_text.chars().take(ARTICLE_BODY_LIMIT).collect();

    format!(
        r#"You are a LinkedIn strategist. Summarize this article into a compelling, SEO-optimized LinkedIn post.

Title: {title}
URL: {url}
Industry: {industry}
Tone: {tone_instruction}

Content:
{body}

Post requirements:
- Catchy opening
- 2-3 sentence summary
- Add a unique insight or comment
- End with a CTA or thought-provoking question
- Mention article title or URL
- Add 3-5 trending hashtags
- Include emojis where appropriate

Now write the post:"#,
        title = article.title,
        url = article.source_url,
    )
}

/// Builds the degraded prompt used when article extraction fails.
///
/// The request is not aborted: the backend is instead asked to summarize
/// the URL directly, with the raw tone value rather than a mapped style
/// instruction.
pub fn build_degraded_prompt(url: &str, industry: Option<&str>, tone: &str) -> String {
    let industry = or_default(industry, DEFAULT_INDUSTRY);
    format!(
        "Summarize the main points of this article for LinkedIn: {url}\nIndustry: {industry}\nTone: {tone}"
    )
}
