//! Input choices, weather buckets and the scored result record.
//!
//! Every categorical value serializes as its lowercase name, which is also
//! what [`FromStr`] accepts. The result record ([`CardSpec`]) has no public
//! constructor: it is produced by the scorer or by a successful decode, so
//! every value in circulation satisfies the field bounds.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Schema tag carried in every encoded record.
pub const CARD_SPEC_VERSION: u64 = 1;

/// Upper bound (inclusive) on the turbulence score.
pub const MAX_TURBULENCE: u8 = 100;

/// Maximum headline length, in characters.
pub const HEADLINE_MAX_CHARS: usize = 40;
/// Maximum vibe length, in characters.
pub const VIBE_MAX_CHARS: usize = 80;
/// Maximum action length, in characters.
pub const ACTION_MAX_CHARS: usize = 80;

/// A string that does not name a known choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {})", .expected.join(", "))]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All values, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(ParseChoiceError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: &[$($text),+],
                    }),
                }
            }
        }
    };
}

choice_enum! {
    /// How much energy the user has right now.
    Energy, "energy" { High => "high", Mid => "mid", Low => "low" }
}

choice_enum! {
    /// How open the user is to other people today.
    Social, "social" { Open => "open", Neutral => "neutral", Off => "off" }
}

choice_enum! {
    /// How heavy today's schedule feels.
    Pressure, "pressure" { Calm => "calm", Normal => "normal", Overload => "overload" }
}

choice_enum! {
    /// Five-bucket classification of turbulence, calmest first.
    Weather, "weather" {
        Clear => "clear",
        Cloudy => "cloudy",
        Rain => "rain",
        Storm => "storm",
        Typhoon => "typhoon",
    }
}

/// The three answers collected on the create screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InputState {
    pub energy: Energy,
    pub social: Social,
    pub pressure: Pressure,
}

impl InputState {
    pub fn new(energy: Energy, social: Social, pressure: Pressure) -> Self {
        InputState {
            energy,
            social,
            pressure,
        }
    }

    /// Every one of the 27 possible answer combinations.
    pub fn all() -> impl Iterator<Item = InputState> {
        Energy::ALL.iter().flat_map(|&energy| {
            Social::ALL.iter().flat_map(move |&social| {
                Pressure::ALL
                    .iter()
                    .map(move |&pressure| InputState::new(energy, social, pressure))
            })
        })
    }
}

impl Default for InputState {
    /// The create screen's initial selection.
    fn default() -> Self {
        InputState::new(Energy::Mid, Social::Neutral, Pressure::Normal)
    }
}

/// Headline, vibe and action text shown on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardCopy {
    pub headline: &'static str,
    pub vibe: &'static str,
    pub action: &'static str,
}

/// The scored result record.
///
/// Immutable: fields are only readable. Serializes to the canonical JSON
/// form the codec compresses (`v` and `createdAt` are the wire names of
/// `version` and `created_at`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSpec {
    #[serde(rename = "v")]
    pub(crate) version: u64,
    pub(crate) energy: Energy,
    pub(crate) social: Social,
    pub(crate) pressure: Pressure,
    pub(crate) weather: Weather,
    pub(crate) turbulence: u8,
    pub(crate) headline: String,
    pub(crate) vibe: String,
    pub(crate) action: String,
    #[serde(rename = "createdAt")]
    pub(crate) created_at: String,
}

impl CardSpec {
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn energy(&self) -> Energy {
        self.energy
    }

    pub fn social(&self) -> Social {
        self.social
    }

    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    /// The answers this record was scored from.
    pub fn input(&self) -> InputState {
        InputState::new(self.energy, self.social, self.pressure)
    }

    pub fn weather(&self) -> Weather {
        self.weather
    }

    pub fn turbulence(&self) -> u8 {
        self.turbulence
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn vibe(&self) -> &str {
        &self.vibe
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// RFC 3339 creation timestamp.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Canonical JSON form of the record.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "v": self.version,
            "energy": self.energy,
            "social": self.social,
            "pressure": self.pressure,
            "weather": self.weather,
            "turbulence": self.turbulence,
            "headline": self.headline,
            "vibe": self.vibe,
            "action": self.action,
            "createdAt": self.created_at,
        })
    }
}
