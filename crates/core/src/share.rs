//! Share copy: titles, descriptions and platform texts for a result.

use crate::types::CardSpec;

/// Where a copied share text is meant to be pasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Kakao,
    Instagram,
}

pub fn weather_emoji(turbulence: u8) -> &'static str {
    match turbulence {
        0..=24 => "☀️",
        25..=44 => "⛅",
        45..=64 => "🌧️",
        65..=81 => "⛈️",
        _ => "🌀",
    }
}

/// One-line condition tag shown next to the headline.
pub fn status_tag(turbulence: u8) -> &'static str {
    match turbulence {
        0..=24 => "오늘 컨디션 매우 좋음",
        25..=44 => "오늘은 무난한 날",
        45..=64 => "집중 관리 필요",
        65..=81 => "과부하 주의",
        _ => "생존 모드",
    }
}

pub fn share_title(spec: &CardSpec) -> String {
    format!(
        "오늘의 멘탈 날씨 {}% {}",
        spec.turbulence(),
        weather_emoji(spec.turbulence())
    )
}

pub fn share_description(spec: &CardSpec) -> String {
    format!("{} · {}", spec.headline(), status_tag(spec.turbulence()))
}

/// Text attached to the native share sheet and to a copied link.
pub fn share_text(spec: &CardSpec) -> String {
    format!(
        "내 멘탈 날씨는 {}% ({})야. 너도 10초 안에 해봐.",
        spec.turbulence(),
        spec.headline()
    )
}

pub fn platform_text(spec: &CardSpec, platform: Platform) -> String {
    let t = spec.turbulence();
    match platform {
        Platform::Kakao => format!(
            "{} {}\n오늘 내 멘탈 날씨 {}% ({}) 떴어.\n너도 10초 테스트 해봐 👇",
            weather_emoji(t),
            status_tag(t),
            t,
            spec.headline()
        ),
        Platform::Instagram => format!(
            "{} 오늘의 멘탈 날씨: {}% {}\n{}\n\n#MoodCast #멘탈날씨카드 #오늘컨디션 #심리테스트 #스토리공유",
            weather_emoji(t),
            t,
            spec.headline(),
            status_tag(t)
        ),
    }
}

/// Append a URL to a share text, as pasted into a chat.
pub fn with_link(text: &str, url: &str) -> String {
    format!("{} {}", text, url).trim().to_string()
}
