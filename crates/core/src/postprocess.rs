//! Post-processing of generated text.
//!
//! [`normalize`] guarantees that every post leaving the pipeline carries at
//! least [`MIN_EMOJIS`] emoji code points and [`MIN_HASHTAGS`] hashtag
//! tokens. It only ever appends: model-generated content is never removed
//! or reordered, and running it on an already-compliant post is a no-op
//! apart from whitespace trimming.

use regex::Regex;

use crate::decorations::decoration_for;

/// Minimum emoji code points in a finished post.
pub const MIN_EMOJIS: usize = 2;

/// Minimum hashtag tokens in a finished post.
pub const MIN_HASHTAGS: usize = 3;

/// Unicode ranges classified as emoji.
///
/// Misc Symbols and Pictographs, Emoticons, Transport and Map Symbols,
/// Supplemental Symbols and Pictographs, Symbols and Pictographs Extended-A,
/// Miscellaneous Symbols, Dingbats, Regional Indicators, and the
/// Miscellaneous Symbols and Arrows block.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F300, 0x1F5FF),
    (0x1F600, 0x1F64F),
    (0x1F680, 0x1F6FF),
    (0x1F900, 0x1F9FF),
    (0x1FA70, 0x1FAFF),
    (0x2600, 0x26FF),
    (0x2700, 0x27BF),
    (0x1F1E6, 0x1F1FF),
    (0x2B00, 0x2BFF),
];

/// Returns true when the character falls in one of the emoji blocks.
fn is_emoji(c: char) -> bool {
    let code = c as u32;
    EMOJI_RANGES.iter().any(|(lo, hi)| code >= *lo && code <= *hi)
}

/// Counts emoji code points in the text.
///
/// Variation selectors and joiners are not counted, so a multi-scalar
/// emoji sequence counts once per pictographic scalar.
pub fn emoji_count(text: &str) -> usize {
    text.chars().filter(|c| is_emoji(*c)).count()
}

/// Counts hashtag tokens (`#` followed by word characters) in the text.
pub fn hashtag_count(text: &str) -> usize {
    let re = Regex::new(r"#\w+").unwrap();
    re.find_iter(text).count()
}

/// Ensures minimum emoji and hashtag density, appending from the
/// decoration table when the text falls short.
///
/// Missing emojis are appended space-separated on the same line; missing
/// hashtags are appended space-separated on a new line. The result is
/// trimmed of leading and trailing whitespace. This function is total and
/// idempotent.
///
/// # Example
///
/// ```rust
/// use postcraft_core::postprocess::{normalize, emoji_count, hashtag_count};
///
/// let post = normalize("AI is reshaping banking.", Some("AI"), Some("finance"));
/// assert!(emoji_count(&post) >= 2);
/// assert!(hashtag_count(&post) >= 3);
/// ```
pub fn normalize(text: &str, topic: Option<&str>, industry: Option<&str>) -> String {
    let decoration = decoration_for(topic, industry);
    let mut out = text.to_string();

    let emojis_present = emoji_count(&out);
    if emojis_present < MIN_EMOJIS {
        for emoji in decoration.emojis.iter().take(MIN_EMOJIS - emojis_present) {
            out.push(' ');
            out.push_str(emoji);
        }
    }

    let hashtags_present = hashtag_count(&out);
    if hashtags_present < MIN_HASHTAGS {
        out.push('\n');
        let needed: Vec<&str> = decoration
            .hashtags
            .iter()
            .take(MIN_HASHTAGS - hashtags_present)
            .copied()
            .collect();
        out.push_str(&needed.join(" "));
    }

    out.trim().to_string()
}
