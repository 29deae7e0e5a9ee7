//! Lenient date/time recognition
//!
//! Accepts the common textual forms people type into forms and query strings
//! without depending on a locale. Month and weekday names are English only.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Relative keywords resolved against "now"
const RELATIVE_KEYWORDS: &[&str] = &["now", "today", "tomorrow", "yesterday", "midnight", "noon"];

/// Zone names that may trail an otherwise naive date-time
const ZONE_ABBREVIATIONS: &[&str] = &[
    "UTC", "GMT", "Z", "UT", "EST", "EDT", "CST", "CDT", "MST", "MDT", "PST", "PDT", "CET",
    "CEST", "EET", "EEST", "WET", "WEST", "BST", "IST", "JST", "AEST", "AEDT",
];

const UNIT: &str = r"(?:sec|second|min|minute|hour|day|week|fortnight|month|year)s?";

const WEEKDAY: &str = r"(?:mon|monday|tue|tues|tuesday|wed|wednesday|thu|thur|thurs|thursday|fri|friday|sat|saturday|sun|sunday)";

// "+1 day", "-2 weeks", "3 months ago", "next monday", "last year",
// "friday", "first day of next month"
static RELATIVE_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"(?i)^(?:[+-]?\d+\s*{UNIT}(?:\s+ago)?|(?:next|last|this)\s+(?:{WEEKDAY}|{UNIT})|{WEEKDAY}|(?:first|last)\s+day\s+of\s+(?:next|last|this)\s+(?:week|month|year))$"
    );
    Regex::new(&pattern).unwrap()
});

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %b %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%B %d %Y",
];

const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S",
    "%H:%M:%S%.f",
    "%H:%M",
    "%I:%M:%S %p",
    "%I:%M %p",
    "%I:%M%p",
];

/// What a piece of text was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporal {
    /// A keyword such as `now` or `tomorrow`
    Relative,
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
}

/// Recognize a date, a time, or a date-time
///
/// Tried in order: relative keywords and phrases, `@<unix seconds>`, RFC 3339,
/// RFC 2822, then the naive layouts. A trailing zone name such as `UTC` is
/// ignored when the rest of the text is a naive layout.
pub fn parse_temporal(s: &str) -> Option<Temporal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if is_relative(s) {
        return Some(Temporal::Relative);
    }

    if let Some(seconds) = s.strip_prefix('@') {
        return seconds
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| Temporal::DateTime(dt.naive_utc()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Temporal::DateTime(dt.naive_utc()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(Temporal::DateTime(dt.naive_utc()));
    }

    parse_naive(s).or_else(|| strip_zone(s).and_then(parse_naive))
}

fn is_relative(s: &str) -> bool {
    RELATIVE_KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(s)) || RELATIVE_REGEX.is_match(s)
}

fn strip_zone(s: &str) -> Option<&str> {
    let (head, zone) = s.rsplit_once(char::is_whitespace)?;
    ZONE_ABBREVIATIONS
        .iter()
        .any(|z| z.eq_ignore_ascii_case(zone))
        .then(|| head.trim_end())
}

fn parse_naive(s: &str) -> Option<Temporal> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(Temporal::DateTime)
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .map(Temporal::Date)
        })
        .or_else(|| {
            TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
                .map(Temporal::Time)
        })
}

/// Check if text is any recognizable date/time
pub fn is_date_like(s: &str) -> bool {
    parse_temporal(s).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_iso_date() {
        assert_eq!(
            parse_temporal("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15).map(Temporal::Date)
        );
    }

    #[test]
    fn test_datetime_with_space_and_t() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(10, 30, 0))
            .map(Temporal::DateTime);

        assert_eq!(parse_temporal("2024-01-15 10:30:00"), expected);
        assert_eq!(parse_temporal("2024-01-15T10:30"), expected);
    }

    #[test]
    fn test_time_only() {
        assert_eq!(
            parse_temporal("14:05"),
            NaiveTime::from_hms_opt(14, 5, 0).map(Temporal::Time)
        );
        assert_eq!(
            parse_temporal("2:05 PM"),
            NaiveTime::from_hms_opt(14, 5, 0).map(Temporal::Time)
        );
    }

    #[test]
    fn test_timestamp() {
        assert_eq!(
            parse_temporal("@0"),
            NaiveDate::from_ymd_opt(1970, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(Temporal::DateTime)
        );
        assert_eq!(parse_temporal("@soon"), None);
    }

    #[rstest]
    #[case("now")]
    #[case("Tomorrow")]
    #[case("2024-02-29T12:00:00Z")]
    #[case("2024-02-29T12:00:00+05:30")]
    #[case("Tue, 1 Jul 2003 10:52:37 +0200")]
    #[case("2024/03/01")]
    #[case("03/01/2024")]
    #[case("01.03.2024")]
    #[case("1 Mar 2024")]
    #[case("March 1, 2024")]
    #[case("15 January 2024")]
    #[case("January 15 2024")]
    fn test_recognized(#[case] input: &str) {
        assert!(is_date_like(input), "expected {input:?} to be recognized");
    }

    #[rstest]
    #[case("")]
    #[case("not a date")]
    #[case("2024-13-45")]
    #[case("2023-02-29")]
    #[case("25:00")]
    #[case("12345")]
    #[case("+1 fortnights later")]
    #[case("next blursday")]
    #[case("2024-01-15 10:30:00 Mars")]
    fn test_rejected(#[case] input: &str) {
        assert!(!is_date_like(input), "expected {input:?} to be rejected");
    }

    #[rstest]
    #[case("+1 day")]
    #[case("-2 weeks")]
    #[case("3 months")]
    #[case("1 week ago")]
    #[case("10 minutes ago")]
    #[case("next monday")]
    #[case("last Friday")]
    #[case("next month")]
    #[case("this week")]
    #[case("monday")]
    #[case("Sun")]
    #[case("last day of next month")]
    #[case("first day of this year")]
    fn test_relative_phrases(#[case] input: &str) {
        assert_eq!(parse_temporal(input), Some(Temporal::Relative), "{input:?}");
    }

    #[test]
    fn test_trailing_zone_name() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(10, 30, 0))
            .map(Temporal::DateTime);

        assert_eq!(parse_temporal("2024-01-15 10:30:00 UTC"), expected);
        assert_eq!(parse_temporal("2024-01-15 10:30:00 gmt"), expected);
        assert_eq!(
            parse_temporal("14:05 PST"),
            NaiveTime::from_hms_opt(14, 5, 0).map(Temporal::Time)
        );
    }
}
