//! Runtime configuration, read once from the environment.
//!
//! - `MOODCAST_SITE_URL`     public origin used in share links (default `http://localhost:3000`)
//! - `MOODCAST_KAKAO_JS_KEY` enables the Kakao feed payload when set
//! - `MOODCAST_RATE_LIMIT`   requests per minute per IP for `serve` (default 60)
//! - `MOODCAST_STORE`        path of the last-result pointer file

use std::path::PathBuf;

pub(crate) const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Default rate limit: 60 requests per minute per IP.
pub(crate) const DEFAULT_RATE_LIMIT: u64 = 60;

const STORE_FILE_NAME: &str = "last-result.json";

#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    /// Origin without a trailing slash.
    pub(crate) site_url: String,
    pub(crate) kakao_js_key: Option<String>,
    pub(crate) rate_limit: u64,
    pub(crate) store_path: PathBuf,
}

impl AppConfig {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; empty values count as unset.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let site_url = get("MOODCAST_SITE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());

        let rate_limit = get("MOODCAST_RATE_LIMIT")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_RATE_LIMIT);

        let store_path = get("MOODCAST_STORE")
            .map(PathBuf::from)
            .or_else(|| {
                get("HOME").map(|home| PathBuf::from(home).join(".moodcast").join(STORE_FILE_NAME))
            })
            .unwrap_or_else(|| PathBuf::from(".moodcast-last-result.json"));

        AppConfig {
            site_url,
            kakao_js_key: get("MOODCAST_KAKAO_JS_KEY"),
            rate_limit,
            store_path,
        }
    }

    /// Absolute URL of the result page for a token.
    pub(crate) fn result_url(&self, token: Option<&str>) -> String {
        match token {
            Some(t) if !t.is_empty() => format!("{}/result?s={}", self.site_url, t),
            _ => format!("{}/result", self.site_url),
        }
    }

    /// Absolute URL of the social preview image for a token.
    pub(crate) fn og_image_url(&self, token: Option<&str>) -> String {
        match token {
            Some(t) if !t.is_empty() => format!("{}/api/og?s={}", self.site_url, t),
            _ => format!("{}/api/og", self.site_url),
        }
    }
}
