//! Result-page metadata (title, description, canonical and preview URLs).
//!
//! A token that does not decode still yields usable metadata: the generic
//! placeholder copy, pointing at the bare result page.

use moodcast_core::share::{share_description, share_title};
use moodcast_core::CardSpec;
use serde::Serialize;

use crate::config::AppConfig;

pub(crate) const SITE_NAME: &str = "MoodCast";
pub(crate) const PLACEHOLDER_TITLE: &str = "결과 확인 | MoodCast";
pub(crate) const PLACEHOLDER_DESCRIPTION: &str = "멘탈 날씨 결과를 확인하고 공유해보세요.";
pub(crate) const OG_IMAGE_ALT: &str = "MoodCast 결과 카드";
pub(crate) const OG_WIDTH: u32 = 1200;
pub(crate) const OG_HEIGHT: u32 = 630;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct PageMetadata {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) canonical_url: String,
    pub(crate) og_image_url: String,
    pub(crate) og_image_alt: &'static str,
    pub(crate) og_image_width: u32,
    pub(crate) og_image_height: u32,
}

/// Metadata for `/result?s=<token>`. `spec` is the already-decoded token.
pub(crate) fn result_metadata(
    config: &AppConfig,
    token: Option<&str>,
    spec: Option<&CardSpec>,
) -> PageMetadata {
    let (title, description) = match spec {
        Some(spec) => (
            format!("{} | {}", share_title(spec), SITE_NAME),
            share_description(spec),
        ),
        None => (
            PLACEHOLDER_TITLE.to_string(),
            PLACEHOLDER_DESCRIPTION.to_string(),
        ),
    };

    PageMetadata {
        title,
        description,
        canonical_url: config.result_url(token),
        og_image_url: config.og_image_url(token),
        og_image_alt: OG_IMAGE_ALT,
        og_image_width: OG_WIDTH,
        og_image_height: OG_HEIGHT,
    }
}
