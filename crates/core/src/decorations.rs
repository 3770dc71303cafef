//! Engagement-decoration lookup table.
//!
//! A static mapping from a normalized industry/topic keyword to ordered
//! emoji and hashtag candidates, with a required `"others"` fallback key.
//! The table is read-only and process-wide; post-processing appends
//! candidates from it, in order, until the minimum emoji and hashtag
//! counts are met.

/// Ordered decoration candidates for one keyword.
#[derive(Debug, Clone, Copy)]
pub struct Decoration {
    /// Normalized (lowercase) industry/topic keyword.
    pub key: &'static str,
    /// Emoji candidates, appended in order.
    pub emojis: &'static [&'static str],
    /// Hashtag candidates, appended in order.
    pub hashtags: &'static [&'static str],
}

/// Key of the fallback entry used when neither industry nor topic matches.
pub const FALLBACK_KEY: &str = "others";

const OTHERS: Decoration = Decoration {
    key: FALLBACK_KEY,
    emojis: &["✨", "💼", "🌟"],
    hashtags: &["#ProfessionalGrowth", "#Innovation", "#Networking", "#CareerDevelopment"],
};

const TABLE: &[Decoration] = &[
    Decoration {
        key: "technology",
        emojis: &["🚀", "💻", "🤖"],
        hashtags: &["#Technology", "#Innovation", "#TechTrends", "#DigitalTransformation"],
    },
    Decoration {
        key: "finance",
        emojis: &["💰", "📊", "💹"],
        hashtags: &["#Finance", "#FinTech", "#Investing", "#Markets"],
    },
    Decoration {
        key: "marketing",
        emojis: &["📣", "🎯", "📈"],
        hashtags: &["#Marketing", "#DigitalMarketing", "#Branding", "#GrowthStrategy"],
    },
    Decoration {
        key: "healthcare",
        emojis: &["🩺", "💊", "❤️"],
        hashtags: &["#Healthcare", "#HealthTech", "#Wellness", "#MedTech"],
    },
    Decoration {
        key: "education",
        emojis: &["📚", "🎓", "✏️"],
        hashtags: &["#Education", "#Learning", "#EdTech", "#LifelongLearning"],
    },
    OTHERS,
];

/// Looks up the decoration entry for an exact normalized key.
pub fn lookup(key: &str) -> Option<&'static Decoration> {
    TABLE.iter().find(|d| d.key == key)
}

/// Resolves the decoration entry for a request.
///
/// The lowercased industry wins when it is present in the table, then the
/// lowercased topic, then the `"others"` fallback entry.
pub fn decoration_for(topic: Option<&str>, industry: Option<&str>) -> &'static Decoration {
    industry
        .map(str::to_lowercase)
        .and_then(|k| lookup(k.trim()))
        .or_else(|| topic.map(str::to_lowercase).and_then(|k| lookup(k.trim())))
        .unwrap_or(&OTHERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_wins_over_topic() {
        let decoration = decoration_for(Some("technology"), Some("finance"));
        assert_eq!(decoration.key, "finance");
    }

    #[test]
    fn test_topic_used_when_industry_unknown() {
        let decoration = decoration_for(Some("marketing"), Some("space mining"));
        assert_eq!(decoration.key, "marketing");
    }

    #[test]
    fn test_lookup_is_case_insensitive_via_resolution() {
        let decoration = decoration_for(None, Some("Finance"));
        assert_eq!(decoration.key, "finance");
    }

    #[test]
    fn test_unmatched_falls_back_to_others() {
        let decoration = decoration_for(Some("underwater basket weaving"), None);
        assert_eq!(decoration.key, FALLBACK_KEY);
    }

    #[test]
    fn test_every_entry_can_satisfy_minimums() {
        for decoration in TABLE {
            assert!(decoration.emojis.len() >= 2, "{} needs 2 emojis", decoration.key);
            assert!(decoration.hashtags.len() >= 3, "{} needs 3 hashtags", decoration.key);
        }
    }
}
