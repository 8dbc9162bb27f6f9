//! Everything a client needs to share a result: links, texts, and the
//! Kakao feed payload.
//!
//! Image export, clipboard and the native share sheet run in the browser;
//! this module only prepares their inputs.

use moodcast_core::share::{
    platform_text, share_description, share_text, share_title, with_link, Platform,
};
use moodcast_core::CardSpec;
use serde::Serialize;

use crate::config::AppConfig;

const KAKAO_BUTTON_TITLE: &str = "나도 테스트하기";
const KAKAO_SHARER: &str = "https://sharer.kakao.com/talk/friends/picker/link";
const INSTAGRAM_URL: &str = "https://www.instagram.com/";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SharePlan {
    pub(crate) share_url: String,
    pub(crate) og_image_url: String,
    /// File name for the exported PNG card.
    pub(crate) image_file_name: String,
    pub(crate) title: String,
    pub(crate) description: String,
    /// Native share sheet text.
    pub(crate) share_text: String,
    /// Text for "copy link": share text plus URL.
    pub(crate) link_text: String,
    pub(crate) kakao_text: String,
    pub(crate) instagram_text: String,
    pub(crate) instagram_url: &'static str,
    /// Present only when a Kakao JS key is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) kakao_feed: Option<KakaoFeed>,
    /// Web sharer link used when the Kakao SDK is unavailable.
    pub(crate) kakao_fallback_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct KakaoFeed {
    pub(crate) object_type: &'static str,
    pub(crate) content: KakaoContent,
    pub(crate) buttons: Vec<KakaoButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct KakaoContent {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) image_url: String,
    pub(crate) link: KakaoLink,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct KakaoButton {
    pub(crate) title: &'static str,
    pub(crate) link: KakaoLink,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct KakaoLink {
    pub(crate) mobile_web_url: String,
    pub(crate) web_url: String,
}

impl KakaoLink {
    fn to(url: &str) -> Self {
        KakaoLink {
            mobile_web_url: url.to_string(),
            web_url: url.to_string(),
        }
    }
}

pub(crate) fn build_share_plan(config: &AppConfig, spec: &CardSpec, token: &str) -> SharePlan {
    let share_url = config.result_url(Some(token));
    let og_image_url = config.og_image_url(Some(token));
    let title = share_title(spec);
    let description = share_description(spec);
    let text = share_text(spec);

    let kakao_feed = config.kakao_js_key.as_ref().map(|_| KakaoFeed {
        object_type: "feed",
        content: KakaoContent {
            title: title.clone(),
            description: description.clone(),
            image_url: og_image_url.clone(),
            link: KakaoLink::to(&share_url),
        },
        buttons: vec![KakaoButton {
            title: KAKAO_BUTTON_TITLE,
            link: KakaoLink::to(&share_url),
        }],
    });

    SharePlan {
        image_file_name: format!("moodcast-{}.png", spec.turbulence()),
        link_text: with_link(&text, &share_url),
        kakao_text: with_link(&platform_text(spec, Platform::Kakao), &share_url),
        instagram_text: platform_text(spec, Platform::Instagram),
        instagram_url: INSTAGRAM_URL,
        kakao_fallback_url: format!("{}?url={}", KAKAO_SHARER, urlencoding::encode(&share_url)),
        share_text: text,
        share_url,
        og_image_url,
        title,
        description,
        kakao_feed,
    }
}
