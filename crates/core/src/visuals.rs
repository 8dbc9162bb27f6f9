//! Per-weather card styling.

use crate::types::Weather;

/// Icon word, Korean label and two-stop gradient for a weather bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherVisuals {
    pub icon: &'static str,
    pub label: &'static str,
    /// `(start, end)` hex colors, drawn top-left to bottom-right.
    pub gradient: (&'static str, &'static str),
}

/// Gradient for the card shown when no result could be decoded.
pub const PLACEHOLDER_GRADIENT: (&str, &str) = ("#0f172a", "#1e293b");

pub fn weather_visuals(weather: Weather) -> WeatherVisuals {
    match weather {
        Weather::Clear => WeatherVisuals {
            icon: "SUN",
            label: "맑음",
            gradient: ("#fbbf24", "#fb7185"),
        },
        Weather::Cloudy => WeatherVisuals {
            icon: "CLOUD",
            label: "구름",
            gradient: ("#94a3b8", "#7dd3fc"),
        },
        Weather::Rain => WeatherVisuals {
            icon: "RAIN",
            label: "비",
            gradient: ("#22d3ee", "#3b82f6"),
        },
        Weather::Storm => WeatherVisuals {
            icon: "STORM",
            label: "폭풍",
            gradient: ("#6366f1", "#111827"),
        },
        Weather::Typhoon => WeatherVisuals {
            icon: "TYPHOON",
            label: "태풍",
            gradient: ("#c026d3", "#0f172a"),
        },
    }
}
