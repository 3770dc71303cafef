//! Canned fallback posts for fully-degraded operation.
//!
//! When every generation backend fails and the pipeline is configured for
//! offline fallback, a post is synthesized locally from a small rotating
//! set of templates parameterized by topic and industry. Template selection
//! goes through an injected [`IndexPicker`] so tests stay deterministic.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Selection strategy for rotating template sets.
pub trait IndexPicker: Send + Sync {
    /// Picks an index in `0..len`. `len` is always non-zero.
    fn pick(&self, len: usize) -> usize;
}

/// Default picker: cycles through indices in order.
#[derive(Debug, Default)]
pub struct RoundRobin {
    next: AtomicUsize,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IndexPicker for RoundRobin {
    fn pick(&self, len: usize) -> usize {
        self.next.fetch_add(1, Ordering::Relaxed) % len
    }
}

/// Picker that always returns the same index, for tests and reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub usize);

impl IndexPicker for Fixed {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Synthesizes a local post when no backend is reachable.
///
/// The body always contains the topic and industry verbatim; a hashtag
/// line derived from both is appended below it.
pub fn canned_post(topic: &str, industry: &str, picker: &dyn IndexPicker) -> String {
    let bodies = [
        format!(
            "🚀 Excited to share insights about {topic} in the {industry} space! The journey of continuous learning and growth never stops. What's your experience with this?"
        ),
        format!(
            "💡 Just completed an amazing {topic} project! The {industry} industry is evolving rapidly, and staying ahead requires constant innovation. How do you stay updated?"
        ),
        format!(
            "🎯 Another milestone achieved in {topic}! The {industry} landscape is full of opportunities for those willing to adapt and grow. What challenges are you facing?"
        ),
        format!(
            "✨ Reflecting on the latest developments in {topic}. The {industry} sector continues to surprise and inspire. What trends are you most excited about?"
        ),
    ];
    let body = &bodies[picker.pick(bodies.len())];

    format!(
        "{body}\n\n#{} #{} #ProfessionalGrowth #Innovation",
        industry.replace(' ', ""),
        topic.replace(' ', ""),
    )
}
