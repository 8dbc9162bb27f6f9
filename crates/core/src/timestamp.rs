//! `createdAt` formatting and validation.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const FALLBACK: &str = "1970-01-01T00:00:00.000Z";

/// Format as UTC RFC 3339 with millisecond precision, e.g. `2026-10-19T08:30:00.000Z`.
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let utc = at.to_offset(UtcOffset::UTC);
    utc.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))
    .or_else(|_| utc.format(&Rfc3339))
    .unwrap_or_else(|_| FALLBACK.to_string())
}

/// Whether `value` is an RFC 3339 timestamp.
pub fn is_valid_timestamp(value: &str) -> bool {
    OffsetDateTime::parse(value, &Rfc3339).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_format_pads_milliseconds() {
        assert_eq!(
            format_timestamp(datetime!(2026-03-04 05:06:07 UTC)),
            "2026-03-04T05:06:07.000Z"
        );
    }

    #[test]
    fn test_format_converts_to_utc() {
        assert_eq!(
            format_timestamp(datetime!(2026-03-04 09:00:00.5 +09:00)),
            "2026-03-04T00:00:00.500Z"
        );
    }

    #[test]
    fn test_formatted_value_is_valid() {
        assert!(is_valid_timestamp(&format_timestamp(OffsetDateTime::now_utc())));
    }

    #[test]
    fn test_rejects_non_timestamps() {
        assert!(!is_valid_timestamp(""));
        assert!(!is_valid_timestamp("yesterday"));
        assert!(!is_valid_timestamp("2026-13-01T00:00:00Z"));
        assert!(is_valid_timestamp("2026-01-01T00:00:00+09:00"));
    }
}
