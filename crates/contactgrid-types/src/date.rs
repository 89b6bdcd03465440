//! Lenient date parsing for contact records.
//!
//! Sources deliver dates in whatever shape their export produced. The parser
//! accepts RFC 3339, RFC 2822 and a fixed list of common layouts. Values that
//! carry no offset are read as UTC, so the same input always yields the same
//! instant regardless of the host timezone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Layouts that carry an explicit offset.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S %z",
    "%a %b %d %Y %H:%M:%S GMT%z",
];

/// Date-time layouts without an offset (interpreted as UTC).
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%b %d, %Y %H:%M:%S",
    "%a %b %d %Y %H:%M:%S",
];

/// Date-only layouts (midnight UTC).
const NAIVE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%a, %b %d, %Y",
    "%a %b %d %Y",
];

/// Parse a source date string into a UTC instant.
///
/// Returns `None` for empty or unrecognized input; callers decide how an
/// unknown date is displayed.
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(naive.and_utc());
        }
    }

    for fmt in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }

    None
}

/// Canonical ISO-8601 form: UTC, millisecond precision, `Z` suffix.
pub fn to_iso(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iso(text: &str) -> Option<String> {
        parse_date(text).map(to_iso)
    }

    #[test]
    fn test_date_only_is_midnight_utc() {
        assert_eq!(iso("2020-01-01").as_deref(), Some("2020-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_naive_datetime_is_utc() {
        assert_eq!(
            iso("2020-01-01T00:00:00").as_deref(),
            Some("2020-01-01T00:00:00.000Z")
        );
        assert_eq!(
            iso("2019-06-15 13:45:10").as_deref(),
            Some("2019-06-15T13:45:10.000Z")
        );
    }

    #[test]
    fn test_offset_is_converted() {
        assert_eq!(
            iso("2020-01-01T09:00:00+09:00").as_deref(),
            Some("2020-01-01T00:00:00.000Z")
        );
        assert_eq!(
            iso("Wed, 01 Jan 2020 10:30:00 +0100").as_deref(),
            Some("2020-01-01T09:30:00.000Z")
        );
    }

    #[test]
    fn test_human_layouts() {
        assert_eq!(
            iso("March 5, 2021").as_deref(),
            Some("2021-03-05T00:00:00.000Z")
        );
        assert_eq!(iso("12/24/2018").as_deref(), Some("2018-12-24T00:00:00.000Z"));
    }

    #[test]
    fn test_fractional_seconds_are_truncated_to_millis() {
        assert_eq!(
            iso("2020-01-01T00:00:00.123456Z").as_deref(),
            Some("2020-01-01T00:00:00.123Z")
        );
    }

    #[test]
    fn test_garbage_yields_none() {
        assert_eq!(iso(""), None);
        assert_eq!(iso("   "), None);
        assert_eq!(iso("sometime soon"), None);
        assert_eq!(iso("2020-13-45"), None);
    }
}
