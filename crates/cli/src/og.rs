//! Social preview card, rendered as a 1200x630 SVG.

use moodcast_core::share::{share_description, share_title};
use moodcast_core::visuals::{weather_visuals, PLACEHOLDER_GRADIENT};
use moodcast_core::CardSpec;
use html_escape::encode_text;
use sha2::{Digest, Sha256};

use crate::meta::{OG_HEIGHT, OG_WIDTH, SITE_NAME};

const PLACEHOLDER_DESCRIPTION: &str = "세 번의 선택으로 내 멘탈 날씨를 확인해보세요.";
const BADGE: &str = "멘탈 날씨 카드";
const TAGLINE: &str = "10초로 확인하는 오늘의 감정 기류";
const SCORE_LABEL: &str = "변동성";

/// Text and colors that go onto the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OgCard {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) score: String,
    pub(crate) gradient: (&'static str, &'static str),
}

impl OgCard {
    pub(crate) fn for_spec(spec: Option<&CardSpec>) -> Self {
        match spec {
            Some(spec) => OgCard {
                title: share_title(spec),
                description: share_description(spec),
                score: format!("{}%", spec.turbulence()),
                gradient: weather_visuals(spec.weather()).gradient,
            },
            None => OgCard {
                title: SITE_NAME.to_string(),
                description: PLACEHOLDER_DESCRIPTION.to_string(),
                score: "--".to_string(),
                gradient: PLACEHOLDER_GRADIENT,
            },
        }
    }

    pub(crate) fn render_svg(&self) -> String {
        let (start, end) = self.gradient;
        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <defs>
    <linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0%" stop-color="{start}"/>
      <stop offset="100%" stop-color="{end}"/>
    </linearGradient>
  </defs>
  <rect width="{w}" height="{h}" fill="url(#bg)"/>
  <g fill="#ffffff" font-family="sans-serif">
    <text x="56" y="96" font-size="28" font-weight="800">{site}</text>
    <rect x="908" y="62" width="236" height="48" rx="24" fill="#ffffff" fill-opacity="0.2"/>
    <text x="1026" y="94" font-size="20" font-weight="700" text-anchor="middle">{badge}</text>
    <text x="56" y="300" font-size="64" font-weight="900">{title}</text>
    <text x="56" y="360" font-size="30" fill-opacity="0.95">{description}</text>
    <text x="56" y="574" font-size="22" fill-opacity="0.9">{tagline}</text>
    <text x="1000" y="574" font-size="24" fill-opacity="0.8" text-anchor="end">{label}</text>
    <text x="1144" y="574" font-size="72" font-weight="900" text-anchor="end">{score}</text>
  </g>
</svg>
"##,
            w = OG_WIDTH,
            h = OG_HEIGHT,
            start = start,
            end = end,
            site = SITE_NAME,
            badge = BADGE,
            title = encode_text(&self.title),
            description = encode_text(&self.description),
            tagline = TAGLINE,
            label = SCORE_LABEL,
            score = encode_text(&self.score),
        )
    }
}

/// Strong ETag for a rendered card: the hex SHA-256 of its bytes.
pub(crate) fn etag_for(svg: &str) -> String {
    format!("{:x}", Sha256::digest(svg.as_bytes()))
}
