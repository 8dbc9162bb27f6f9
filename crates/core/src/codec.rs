//! Token codec: [`CardSpec`] to and from a short URL-safe string.
//!
//! A token is the record's canonical JSON, raw-DEFLATE compressed, then
//! base64url encoded without padding. Every character is unreserved in a
//! URL query component, so tokens travel in `?s=` without escaping.
//!
//! [`decode`] is the entry point for untrusted input (shared links): it
//! never panics and collapses every failure to `None`. [`try_decode`]
//! keeps the reason.

use std::io::{Read, Write};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64_URL, Engine as _};
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::timestamp::is_valid_timestamp;
use crate::types::*;

/// Ceiling on inflated payload size. Real records are well under 1 KiB.
pub const MAX_PAYLOAD_BYTES: usize = 64 * 1024;

/// Why a token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("token is empty")]
    Empty,
    #[error("token is not base64url: {0}")]
    Base64(String),
    #[error("token does not inflate: {0}")]
    Inflate(String),
    #[error("token inflates to an empty payload")]
    EmptyPayload,
    #[error("payload exceeds 64 KiB")]
    PayloadTooLarge,
    #[error("payload is not JSON: {0}")]
    Json(String),
    #[error("payload is not a JSON object")]
    NotAnObject,
    #[error("missing required field: '{field}'")]
    MissingField { field: &'static str },
    #[error("field '{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("field '{field}' out of range: {message}")]
    OutOfRange { field: &'static str, message: String },
    #[error("field '{field}' has unknown value '{value}'")]
    UnknownVariant { field: &'static str, value: String },
    #[error("unsupported version {found} (expected 1)")]
    UnsupportedVersion { found: String },
}

/// Encode a record as a URL-safe token.
pub fn encode(spec: &CardSpec) -> String {
    let json = spec.to_json_value().to_string();
    BASE64_URL.encode(deflate(json.as_bytes()))
}

/// Decode a token, or `None` if it is absent, corrupt, or not a valid record.
pub fn decode(token: Option<&str>) -> Option<CardSpec> {
    let token = token?;
    match try_decode(token) {
        Ok(spec) => Some(spec),
        Err(e) => {
            tracing::debug!(error = %e, token_len = token.len(), "rejected result token");
            None
        }
    }
}

/// Decode a token, reporting why it was rejected.
pub fn try_decode(token: &str) -> Result<CardSpec, DecodeError> {
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    let compressed = BASE64_URL
        .decode(token.as_bytes())
        .map_err(|e| DecodeError::Base64(e.to_string()))?;
    let inflated = inflate(&compressed)?;
    if inflated.is_empty() {
        return Err(DecodeError::EmptyPayload);
    }

    let value: serde_json::Value =
        serde_json::from_slice(&inflated).map_err(|e| DecodeError::Json(e.to_string()))?;
    validate_value(&value)
}

fn deflate(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(Vec::with_capacity(bytes.len()), Compression::best());
    // Writes into a Vec only fail on allocation failure, which aborts.
    if encoder.write_all(bytes).is_err() {
        return Vec::new();
    }
    encoder.finish().unwrap_or_default()
}

fn inflate(bytes: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    DeflateDecoder::new(bytes)
        .take(MAX_PAYLOAD_BYTES as u64 + 1)
        .read_to_end(&mut out)
        .map_err(|e| DecodeError::Inflate(e.to_string()))?;
    if out.len() > MAX_PAYLOAD_BYTES {
        return Err(DecodeError::PayloadTooLarge);
    }
    Ok(out)
}

// ── Schema validation ───────────────────────────────────────────────

/// Validate a parsed JSON value against the result-record schema.
///
/// Every field must be present and well-typed; unknown extra fields are
/// ignored.
pub fn validate_value(value: &serde_json::Value) -> Result<CardSpec, DecodeError> {
    let obj = value.as_object().ok_or(DecodeError::NotAnObject)?;
    let field = |name: &'static str| obj.get(name).ok_or(DecodeError::MissingField { field: name });

    let version = required_integer(field("v")?, "v")?;
    if version != i128::from(CARD_SPEC_VERSION) {
        return Err(DecodeError::UnsupportedVersion {
            found: version.to_string(),
        });
    }

    let energy: Energy = required_choice(field("energy")?, "energy")?;
    let social: Social = required_choice(field("social")?, "social")?;
    let pressure: Pressure = required_choice(field("pressure")?, "pressure")?;
    let weather: Weather = required_choice(field("weather")?, "weather")?;

    let turbulence = required_integer(field("turbulence")?, "turbulence")?;
    if !(0..=i128::from(MAX_TURBULENCE)).contains(&turbulence) {
        return Err(DecodeError::OutOfRange {
            field: "turbulence",
            message: format!("{} is not within 0..={}", turbulence, MAX_TURBULENCE),
        });
    }

    let headline = bounded_str(field("headline")?, "headline", HEADLINE_MAX_CHARS)?;
    let vibe = bounded_str(field("vibe")?, "vibe", VIBE_MAX_CHARS)?;
    let action = bounded_str(field("action")?, "action", ACTION_MAX_CHARS)?;

    let created_at = required_str(field("createdAt")?, "createdAt")?;
    if !is_valid_timestamp(created_at) {
        return Err(DecodeError::WrongType {
            field: "createdAt",
            expected: "an RFC 3339 timestamp",
        });
    }

    Ok(CardSpec {
        version: CARD_SPEC_VERSION,
        energy,
        social,
        pressure,
        weather,
        turbulence: turbulence as u8,
        headline,
        vibe,
        action,
        created_at: created_at.to_string(),
    })
}

fn required_str<'a>(v: &'a serde_json::Value, field: &'static str) -> Result<&'a str, DecodeError> {
    v.as_str().ok_or(DecodeError::WrongType {
        field,
        expected: "a string",
    })
}

/// Integer-valued JSON number; `3.0` counts, `3.5` does not.
fn required_integer(v: &serde_json::Value, field: &'static str) -> Result<i128, DecodeError> {
    let wrong = DecodeError::WrongType {
        field,
        expected: "an integer",
    };
    if let Some(n) = v.as_i64() {
        return Ok(i128::from(n));
    }
    if let Some(n) = v.as_u64() {
        return Ok(i128::from(n));
    }
    match v.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e18 => Ok(f as i128),
        _ => Err(wrong),
    }
}

fn required_choice<T>(v: &serde_json::Value, field: &'static str) -> Result<T, DecodeError>
where
    T: std::str::FromStr,
{
    let s = required_str(v, field)?;
    s.parse().map_err(|_| DecodeError::UnknownVariant {
        field,
        value: s.to_string(),
    })
}

/// Required string of 1..=`max_chars` Unicode scalar values.
///
/// Counting is by `char`, not by UTF-16 code unit as in JavaScript, so text
/// outside the Basic Multilingual Plane (most emoji) counts once per
/// character here and twice in a browser.
fn bounded_str(
    v: &serde_json::Value,
    field: &'static str,
    max_chars: usize,
) -> Result<String, DecodeError> {
    let s = required_str(v, field)?;
    let len = s.chars().count();
    if len == 0 || len > max_chars {
        return Err(DecodeError::OutOfRange {
            field,
            message: format!("length {} is not within 1..={}", len, max_chars),
        });
    }
    Ok(s.to_string())
}
