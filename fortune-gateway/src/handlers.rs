//! HTTP request handlers

use crate::api::{CreateFortune, NewFortuneRequest};
use crate::error::ApiResult;
use crate::state::AppState;
use crate::templates::FORTUNES_PAGE;
use axum::{extract::State, response::Html};
use rand::Rng;
use std::time::Instant;
use tracing::{debug, info};

/// Health check
pub async fn healthz() -> &'static str {
    "healthy"
}

/// Proxy a single random fortune, answering with its message as plain text
pub async fn random_fortune(State(state): State<AppState>) -> ApiResult<String> {
    let start = Instant::now();

    let fortune = state.backend.random_fortune().await?;

    let elapsed = start.elapsed();
    crate::metrics::record_request("random", elapsed.as_secs_f64());
    info!(
        "Random fortune {} served ({:.2}ms)",
        fortune.id,
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(fortune.message)
}

/// Render the all-fortunes page
pub async fn all_fortunes(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let start = Instant::now();

    let fortunes = state.backend.list_fortunes().await?;
    debug!("Rendering {} fortunes", fortunes.len());

    let mut context = tera::Context::new();
    context.insert("fortunes", &fortunes);
    let page = state.templates.render(FORTUNES_PAGE, &context)?;

    let elapsed = start.elapsed();
    crate::metrics::record_request("all", elapsed.as_secs_f64());
    info!(
        "Listed {} fortunes ({:.2}ms)",
        fortunes.len(),
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(Html(page))
}

/// Forward a new fortune to the backend with a synthesized id
///
/// The body is decoded by hand so a malformed payload maps to the same
/// decode failure (500) as a malformed backend response. Non-POST methods
/// never reach here; the router answers 405 for them.
pub async fn add_fortune(State(state): State<AppState>, body: String) -> ApiResult<&'static str> {
    let start = Instant::now();

    let req: NewFortuneRequest = serde_json::from_str(&body)?;

    // Advisory id; the backend owns uniqueness
    let id: u32 = rand::thread_rng().gen_range(0..10_000);
    let fortune = CreateFortune {
        id,
        message: req.message,
    };

    state.backend.create_fortune(&fortune).await?;

    let elapsed = start.elapsed();
    crate::metrics::record_request("add", elapsed.as_secs_f64());
    info!(
        "Fortune {} forwarded to backend ({:.2}ms)",
        id,
        elapsed.as_secs_f64() * 1000.0
    );

    Ok("Cookie added!")
}

/// Prometheus metrics endpoint
pub async fn metrics() -> String {
    crate::metrics::get_prometheus_metrics()
}
