//! Lenient timestamp parsing for record fields
//!
//! Records carry timestamps in several shapes: full RFC 3339 from seeding,
//! `datetime-local` input values without seconds, and bare dates. Anything
//! unparseable maps to `None`; callers fall back to a placeholder.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub fn parse_flexible(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive));
    }
    None
}

/// "Jan 16"-style label for chart axes and trend rows
pub fn short_date(value: &str) -> Option<String> {
    parse_flexible(value).map(|dt| dt.format("%b %-d").to_string())
}

/// Millisecond timestamp for ordering; unparseable values sort as epoch,
/// matching `new Date(value || 0)` in the original feed sorting.
pub fn sort_key_millis(value: &str) -> i64 {
    parse_flexible(value).map(|dt| dt.timestamp_millis()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339() {
        let dt = parse_flexible("2024-01-16T10:00:00+00:00").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-01-16 10:00");
    }

    #[test]
    fn parses_datetime_local_without_seconds() {
        assert!(parse_flexible("2024-01-16T10:00").is_some());
    }

    #[test]
    fn parses_bare_date() {
        assert_eq!(short_date("2024-01-16").as_deref(), Some("Jan 16"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_flexible("not a date").is_none());
        assert_eq!(sort_key_millis("not a date"), 0);
        assert_eq!(sort_key_millis(""), 0);
    }

    #[test]
    fn short_date_has_no_zero_padding() {
        assert_eq!(short_date("2024-03-05").as_deref(), Some("Mar 5"));
    }
}
