//! moodcast-core: the MoodCast scoring-and-encoding pipeline.
//!
//! Three answers go in, a scored [`CardSpec`] comes out, and the codec
//! turns it into a URL-safe token and back.
//!
//! # Public API
//!
//! - [`score()`] / [`build_card_spec()`] -- answers to result record
//! - [`encode()`] -- record to token
//! - [`decode()`] -- token to record, `None` on anything invalid
//! - [`try_decode()`] -- same, with a [`DecodeError`] reason
//! - [`share`] -- share titles and platform texts
//! - [`visuals`] -- per-weather card styling

/// Local-storage key under which the most recent token is kept.
pub const LAST_RESULT_KEY: &str = "mw:last-result";

pub mod codec;
pub mod scorer;
pub mod share;
pub mod timestamp;
pub mod types;
pub mod visuals;

// ── Convenience re-exports ───────────────────────────────────────────

pub use codec::{decode, encode, try_decode, validate_value, DecodeError};
pub use scorer::{build_card_spec, build_card_spec_at, score};
pub use types::{
    CardCopy, CardSpec, Energy, InputState, ParseChoiceError, Pressure, Social, Weather,
    CARD_SPEC_VERSION,
};
