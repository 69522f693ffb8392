//! Date parsing and rendering for exercise records.
//!
//! All dates are handled in UTC. Inputs without an offset are read as UTC and
//! date-only inputs land on midnight.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::constants::DATE_DISPLAY_FORMAT;
use crate::error::{AppError, Result};

/// Datetime layouts accepted without an explicit offset
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts, including the service's own display format
const NAIVE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%a %b %d %Y",
    "%B %d, %Y",
    "%b %d %Y",
];

/// Resolve an optional user supplied date, defaulting to now
///
/// Blank input counts as absent. Anything else must parse.
pub fn normalize_date(input: Option<&str>) -> Result<DateTime<Utc>> {
    match input.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(Utc::now()),
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
    }
}

/// Parse a date in any of the accepted layouts
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt.and_utc());
        }
    }

    for format in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

/// Render a date the way API responses show it, e.g. "Mon Jan 1 2024"
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format(DATE_DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_parse_date_only_is_midnight_utc() {
        assert_eq!(parse_date("2024-01-01"), Some(utc(2024, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn test_parse_rfc3339_converts_to_utc() {
        assert_eq!(
            parse_date("2024-03-10T12:30:00+02:00"),
            Some(utc(2024, 3, 10, 10, 30, 0))
        );
        assert_eq!(
            parse_date("2024-03-10T12:30:00Z"),
            Some(utc(2024, 3, 10, 12, 30, 0))
        );
    }

    #[test]
    fn test_parse_rfc2822() {
        assert_eq!(
            parse_date("Mon, 01 Jan 2024 08:00:00 GMT"),
            Some(utc(2024, 1, 1, 8, 0, 0))
        );
    }

    #[test]
    fn test_parse_naive_datetime() {
        assert_eq!(
            parse_date("2024-01-02T07:15:00"),
            Some(utc(2024, 1, 2, 7, 15, 0))
        );
        assert_eq!(
            parse_date("2024-01-02 07:15:00"),
            Some(utc(2024, 1, 2, 7, 15, 0))
        );
        assert_eq!(parse_date("2024-01-02T07:15"), Some(utc(2024, 1, 2, 7, 15, 0)));
    }

    #[test]
    fn test_parse_display_format_and_month_names() {
        assert_eq!(parse_date("Mon Jan 1 2024"), Some(utc(2024, 1, 1, 0, 0, 0)));
        assert_eq!(parse_date("January 15, 2024"), Some(utc(2024, 1, 15, 0, 0, 0)));
        assert_eq!(parse_date("Feb 3 2024"), Some(utc(2024, 2, 3, 0, 0, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date("not-a-date").is_none());
        assert!(parse_date("2024-13-45").is_none());
        assert!(parse_date("").is_none());
        assert!(parse_date("   ").is_none());
    }

    #[test]
    fn test_normalize_defaults_to_now() {
        let before = Utc::now();
        let normalized = normalize_date(None).unwrap();
        let after = Utc::now();
        assert!(normalized >= before && normalized <= after);

        let blank = normalize_date(Some("  ")).unwrap();
        assert!(blank >= before);
    }

    #[test]
    fn test_normalize_rejects_invalid_input() {
        match normalize_date(Some("someday")) {
            Err(AppError::InvalidDate(raw)) => assert_eq!(raw, "someday"),
            other => panic!("expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(utc(2024, 1, 1, 0, 0, 0)), "Mon Jan 1 2024");
        assert_eq!(format_date(utc(2023, 12, 25, 23, 59, 59)), "Mon Dec 25 2023");
        assert_eq!(format_date(utc(2024, 2, 29, 12, 0, 0)), "Thu Feb 29 2024");
    }
}
