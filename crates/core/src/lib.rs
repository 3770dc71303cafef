pub mod article;
pub mod backends;
pub mod canned;
pub mod decorations;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod postprocess;
pub mod prompt;
pub mod request;

pub use article::{ArticleExtract, ArticleExtractor, PageExtractor};
pub use backends::{GeminiBackend, GenerationBackend, OpenRouterBackend};
#[doc(hidden)]
pub use canned::{Fixed, RoundRobin};
pub use canned::{IndexPicker, canned_post};
pub use decorations::{Decoration, decoration_for};
pub use error::{PostcraftError, Result};
pub use fetch::{FetchConfig, fetch_url};
pub use pipeline::{ExhaustionPolicy, GenerationPipeline, PipelineConfig, PipelineConfigBuilder};
pub use postprocess::{emoji_count, hashtag_count, normalize};
pub use prompt::{
    build_article_prompt, build_degraded_prompt, build_topic_prompt, tone_instruction,
};
pub use request::{Backend, GenerationRequest};
