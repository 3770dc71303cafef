//! Minimal HTTP front-end over the generation pipeline.
//!
//! One JSON endpoint, `POST /api/generate-post`, plus a health route. The
//! server runs the pipeline in hard-fail mode: when every backend is down
//! the client gets a 500 with the exhaustion reason rather than a canned
//! post.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use postcraft_core::{Backend, GenerationPipeline, GenerationRequest, PipelineConfig};

struct AppState {
    pipeline: GenerationPipeline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RequestKind {
    #[default]
    Topic,
    Article,
}

#[derive(Debug, Default, Deserialize)]
struct GeneratePostRequest {
    #[serde(rename = "type", default)]
    kind: RequestKind,
    topic: Option<String>,
    url: Option<String>,
    industry: Option<String>,
    tone: Option<String>,
    model: Option<String>,
}

#[derive(Serialize)]
struct GeneratePostResponse {
    post: String,
    title: String,
}

/// Response title: truncated topic plus industry, as shown in the web UI.
fn compose_title(topic: Option<&str>, industry: Option<&str>) -> String {
    let topic: String = topic
        .filter(|t| !t.trim().is_empty())
        .unwrap_or("LinkedIn Growth Strategy")
        .chars()
        .take(60)
        .collect();
    let industry = industry.filter(|i| !i.trim().is_empty()).unwrap_or("Professionals");
    format!("🚀 {} – Key Takeaway for {}", topic, industry)
}

fn error_response(status: StatusCode, message: String) -> axum::response::Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

async fn generate_post(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GeneratePostRequest>,
) -> axum::response::Response {
    let backend = match body.model.as_deref() {
        Some(model) => match model.parse::<Backend>() {
            Ok(backend) => backend,
            Err(reason) => return error_response(StatusCode::BAD_REQUEST, reason),
        },
        None => Backend::default(),
    };

    let tone = body.tone.as_deref().unwrap_or("professional");

    let request = match body.kind {
        RequestKind::Article => {
            let Some(url) = body.url.as_deref() else {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    "Article requests require a url field".to_string(),
                );
            };
            GenerationRequest::from_article(url, body.industry.as_deref(), tone)
        }
        RequestKind::Topic => {
            GenerationRequest::from_topic(body.topic.as_deref(), body.industry.as_deref(), tone)
        }
    }
    .with_preferred_backend(backend);

    match state.pipeline.generate(&request).await {
        Ok(generated) => {
            let response = GeneratePostResponse {
                post: generated,
                title: compose_title(body.topic.as_deref(), body.industry.as_deref()),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!(error = %e, "post generation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("postcraft=info".parse()?))
        .init();

    let gemini_api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
    let openrouter_api_key = std::env::var("OPENROUTER_API_KEY").unwrap_or_default();
    if gemini_api_key.is_empty() && openrouter_api_key.is_empty() {
        return Err("Set GEMINI_API_KEY and/or OPENROUTER_API_KEY".into());
    }

    let config = PipelineConfig::builder()
        .gemini_api_key(gemini_api_key)
        .openrouter_api_key(openrouter_api_key)
        .build();
    let state = Arc::new(AppState { pipeline: GenerationPipeline::from_config(config) });

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());

    let app = Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/api/generate-post", post(generate_post))
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(90)))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "postcraft server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let body: GeneratePostRequest = serde_json::from_str(
            r#"{"type":"article","url":"https://example.com/a","industry":"finance","tone":"casual"}"#,
        )
        .unwrap();
        assert_eq!(body.kind, RequestKind::Article);
        assert_eq!(body.url.as_deref(), Some("https://example.com/a"));
    }

    #[test]
    fn test_request_kind_defaults_to_topic() {
        let body: GeneratePostRequest =
            serde_json::from_str(r#"{"topic":"AI adoption"}"#).unwrap();
        assert_eq!(body.kind, RequestKind::Topic);
    }

    #[test]
    fn test_compose_title() {
        let title = compose_title(Some("AI adoption"), Some("finance"));
        assert_eq!(title, "🚀 AI adoption – Key Takeaway for finance");
    }

    #[test]
    fn test_compose_title_defaults_and_truncation() {
        let title = compose_title(None, None);
        assert!(title.contains("LinkedIn Growth Strategy"));
        assert!(title.contains("Professionals"));

        let long = "x".repeat(100);
        let title = compose_title(Some(&long), None);
        assert!(title.chars().filter(|c| *c == 'x').count() == 60);
    }
}
