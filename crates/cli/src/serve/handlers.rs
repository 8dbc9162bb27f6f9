//! Route handlers: health, score, result, preview card, share plan, sitemap.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use moodcast_core::{
    build_card_spec, decode, encode, Energy, InputState, Pressure, Social, CARD_SPEC_VERSION,
};
use serde::Deserialize;

use super::json_error;
use super::state::AppState;
use crate::meta::{result_metadata, SITE_NAME};
use crate::og::{etag_for, OgCard};
use crate::share_plan::build_share_plan;

const SVG_CONTENT_TYPE: &str = "image/svg+xml";
const MANIFEST_CONTENT_TYPE: &str = "application/manifest+json";
const OG_CACHE_CONTROL: &str = "public, max-age=86400, immutable";

/// `?s=<token>` on the result, preview and share routes.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenQuery {
    s: Option<String>,
}

impl TokenQuery {
    fn token(&self) -> Option<&str> {
        self.s.as_deref().filter(|s| !s.is_empty())
    }
}

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /health
pub(crate) async fn handle_health() -> impl IntoResponse {
    let response = serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "card_spec_version": CARD_SPEC_VERSION,
    });
    (StatusCode::OK, Json(response))
}

/// POST /score
///
/// Body: `{"energy": "...", "social": "...", "pressure": "..."}`.
pub(crate) async fn handle_score(
    State(state): State<Arc<AppState>>,
    Json(parsed): Json<serde_json::Value>,
) -> Response {
    let input = match parse_input(&parsed) {
        Ok(input) => input,
        Err(msg) => return json_error(StatusCode::BAD_REQUEST, &msg).into_response(),
    };

    let spec = build_card_spec(input);
    let token = encode(&spec);
    tracing::info!(turbulence = spec.turbulence(), weather = %spec.weather(), "scored");

    let response = serde_json::json!({
        "spec": spec.to_json_value(),
        "share_url": state.config.result_url(Some(&token)),
        "token": token,
    });
    (StatusCode::OK, Json(response)).into_response()
}

fn parse_input(body: &serde_json::Value) -> Result<InputState, String> {
    if !body.is_object() {
        return Err("request body must be a JSON object".to_string());
    }
    let energy = str_field(body, "energy")?.parse::<Energy>().map_err(|e| format!("{}", e))?;
    let social = str_field(body, "social")?.parse::<Social>().map_err(|e| format!("{}", e))?;
    let pressure = str_field(body, "pressure")?.parse::<Pressure>().map_err(|e| format!("{}", e))?;
    Ok(InputState::new(energy, social, pressure))
}

fn str_field<'a>(body: &'a serde_json::Value, name: &str) -> Result<&'a str, String> {
    body.get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing '{}' field", name))
}

/// GET /result?s=<token>
///
/// Never fails on a bad token: `spec` is null and the metadata falls back
/// to the placeholder copy.
pub(crate) async fn handle_result(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TokenQuery>,
) -> impl IntoResponse {
    let spec = decode(query.token());
    let metadata = result_metadata(&state.config, query.token(), spec.as_ref());
    let response = serde_json::json!({
        "spec": spec.as_ref().map(|s| s.to_json_value()),
        "metadata": metadata,
    });
    (StatusCode::OK, Json(response))
}

/// GET /api/og?s=<token>
///
/// SVG preview card. Sets a strong ETag and answers a matching
/// If-None-Match with 304 Not Modified.
pub(crate) async fn handle_og(Query(query): Query<TokenQuery>, headers: HeaderMap) -> Response {
    let spec = decode(query.token());
    let svg = OgCard::for_spec(spec.as_ref()).render_svg();
    let etag = etag_for(&svg);
    let etag_quoted = format!("\"{}\"", etag);

    let not_modified = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|inm| inm.to_str().ok())
        .is_some_and(|inm| inm == etag_quoted || inm == etag || inm == "*");

    let mut response = if not_modified {
        StatusCode::NOT_MODIFIED.into_response()
    } else {
        let mut response = (StatusCode::OK, svg).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(SVG_CONTENT_TYPE),
        );
        response
    };

    // A 304 repeats the validator and caching policy of the 200.
    let out = response.headers_mut();
    out.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(OG_CACHE_CONTROL),
    );
    if let Ok(val) = etag_quoted.parse() {
        out.insert(header::ETAG, val);
    }
    response
}

/// GET /share?s=<token>
pub(crate) async fn handle_share(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TokenQuery>,
) -> Response {
    let Some(token) = query.token() else {
        return json_error(StatusCode::BAD_REQUEST, "missing 's' parameter").into_response();
    };
    match decode(Some(token)) {
        Some(spec) => {
            let plan = build_share_plan(&state.config, &spec, token);
            (StatusCode::OK, Json(plan)).into_response()
        }
        None => json_error(StatusCode::NOT_FOUND, "result not found").into_response(),
    }
}

/// GET /sitemap
pub(crate) async fn handle_sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let site = &state.config.site_url;
    let entry = |path: &str, priority: f64| {
        serde_json::json!({
            "url": format!("{}{}", site, path),
            "change_frequency": "weekly",
            "priority": priority,
        })
    };
    let response = serde_json::json!({
        "urls": [entry("/", 1.0), entry("/create", 0.9), entry("/result", 0.8)],
    });
    (StatusCode::OK, Json(response))
}

/// GET /manifest.webmanifest
pub(crate) async fn handle_manifest() -> Response {
    let manifest = serde_json::json!({
        "name": SITE_NAME,
        "short_name": SITE_NAME,
        "description": "세 번의 선택으로 지금의 멘탈 날씨를 카드로 만들어 공유하세요.",
        "start_url": "/",
        "display": "standalone",
        "background_color": "#0f172a",
        "theme_color": "#0f172a",
        "lang": "ko",
    });
    let mut response = (StatusCode::OK, Json(manifest)).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(MANIFEST_CONTENT_TYPE),
    );
    response
}
