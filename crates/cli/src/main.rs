use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use postcraft_core::{
    Backend, ExhaustionPolicy, GenerationPipeline, GenerationRequest, PipelineConfig,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Topics rotated through when none is supplied.
const DEFAULT_TOPICS: [&str; 8] = [
    "latest project completion",
    "industry insights and tips",
    "professional achievement",
    "client success story",
    "technology trends",
    "business growth strategies",
    "team collaboration",
    "innovation in the field",
];

/// Draft social-media posts with generative-text backends
#[derive(Parser, Debug)]
#[command(name = "postcraft")]
#[command(author = "Postcraft Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Draft social-media posts with generative-text backends", long_about = None)]
struct Args {
    /// Topic to write about (default: rotating suggestion)
    #[arg(short, long, value_name = "TOPIC", conflicts_with = "url")]
    topic: Option<String>,

    /// Article URL to summarize instead of a topic
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Industry the post targets
    #[arg(short, long, value_name = "INDUSTRY")]
    industry: Option<String>,

    /// Tone (professional, casual, enthusiastic, educational, inspirational)
    #[arg(long, default_value = "professional", value_name = "TONE")]
    tone: String,

    /// Backend to try first (primary/gemini or secondary/openrouter)
    #[arg(short, long, default_value = "primary", value_name = "BACKEND")]
    backend: Backend,

    /// Produce a canned local post when every backend fails
    #[arg(long)]
    offline_fallback: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Print a styled banner for verbose mode
fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Postcraft".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Draft social-media posts with generative-text backends".dimmed());
    eprintln!();
}

/// Print a styled step message
fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Pick a default topic, rotating across invocations by wall-clock nanos.
fn rotating_topic() -> &'static str {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0) as usize;
    DEFAULT_TOPICS[nanos % DEFAULT_TOPICS.len()]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let gemini_api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
    let openrouter_api_key = std::env::var("OPENROUTER_API_KEY").unwrap_or_default();

    if gemini_api_key.is_empty() && openrouter_api_key.is_empty() && !args.offline_fallback {
        bail!(
            "No API keys configured. Set GEMINI_API_KEY and/or OPENROUTER_API_KEY, \
             or pass --offline-fallback for a canned post."
        );
    }

    let policy = if args.offline_fallback {
        ExhaustionPolicy::CannedFallback
    } else {
        ExhaustionPolicy::Error
    };

    let config = PipelineConfig::builder()
        .gemini_api_key(gemini_api_key)
        .openrouter_api_key(openrouter_api_key)
        .timeout(args.timeout)
        .exhaustion_policy(policy)
        .build();
    let pipeline = GenerationPipeline::from_config(config);

    let request = match &args.url {
        Some(url) => {
            if args.verbose {
                print_step(1, 3, &format!("Summarizing {}", url.bright_white().underline()));
            }
            GenerationRequest::from_article(url.clone(), args.industry.as_deref(), &args.tone)
        }
        None => {
            let topic = args.topic.clone().unwrap_or_else(|| rotating_topic().to_string());
            if args.verbose {
                print_step(1, 3, &format!("Drafting post about {}", topic.bright_white()));
            }
            GenerationRequest::from_topic(Some(&topic), args.industry.as_deref(), &args.tone)
        }
    }
    .with_preferred_backend(args.backend);

    if args.verbose {
        print_step(2, 3, "Calling generation backends");
        eprintln!("  {} {:?}", "Preferred:".dimmed(), args.backend);
        eprintln!("  {} {}s", "Timeout:".dimmed(), args.timeout);
        eprintln!();
    }

    let post = pipeline
        .generate(&request)
        .await
        .context("Failed to generate post")?;

    if args.verbose {
        print_step(3, 3, "Writing output");
        eprintln!();
    }

    match args.output {
        Some(path) => {
            fs::write(&path, &post).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Post written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", post);
        }
    }

    Ok(())
}
