//! `moodcast serve` -- HTTP API for scoring, decoding and sharing results.
//!
//! - CORS headers on all responses (permissive; the web client may live on
//!   another origin)
//! - Per-IP rate limiting (default: 60 req/min, `MOODCAST_RATE_LIMIT`)
//!
//! Endpoints:
//! - GET  /health                - Server status
//! - POST /score                 - Score three answers, return record + token
//! - GET  /result?s=<token>      - Decoded record (or null) and page metadata
//! - GET  /api/og?s=<token>      - 1200x630 SVG preview card with ETag
//! - GET  /share?s=<token>       - Share plan for a result
//! - GET  /sitemap               - Public routes
//! - GET  /manifest.webmanifest  - Web app manifest
//!
//! Everything except the preview card is `application/json`.

mod handlers;
mod middleware;
mod state;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{middleware as axum_middleware, Json, Router};
use tower_http::cors::{Any, CorsLayer};

use self::handlers::{
    handle_health, handle_manifest, handle_not_found, handle_og, handle_result, handle_score,
    handle_share, handle_sitemap,
};
use self::middleware::rate_limit_middleware;
use self::state::{AppState, RateLimiter};
use crate::config::AppConfig;

/// Maximum request body size: 16 KB. A score request is three short strings.
const MAX_BODY_SIZE: usize = 16 * 1024;

/// Rate limit window duration in seconds (1 minute).
const RATE_LIMIT_WINDOW_SECS: u64 = 60;

/// Construct a JSON error response with the given status code and message.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({"error": message})))
}

/// All routes plus the rate limit, CORS and body limit layers.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/score", post(handle_score))
        .route("/result", get(handle_result))
        .route("/api/og", get(handle_og))
        .route("/share", get(handle_share))
        .route("/sitemap", get(handle_sitemap))
        .route("/manifest.webmanifest", get(handle_manifest))
        .fallback(handle_not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(state)
}

/// Start the HTTP server on the given port.
pub(crate) async fn start_server(
    port: u16,
    config: AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        rate_limit = config.rate_limit,
        site_url = %config.site_url,
        kakao = config.kakao_js_key.is_some(),
        "starting server"
    );

    let state = Arc::new(AppState {
        rate_limiter: RateLimiter::new(config.rate_limit),
        config,
    });
    let app = router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("MoodCast listening on http://0.0.0.0:{}", port);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("server shut down");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
