//! Timestamp helpers shared by the HTTP layer.
//!
//! Attendance timestamps are naive local date-times. Callers may send them with a `T` or
//! a space separator, with or without fractional seconds, or as RFC 3339 with an offset.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

const ACCEPTED_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Current server-local time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Current server-local date.
pub fn today() -> NaiveDate {
    now().date()
}

/// Parses a caller-supplied timestamp into server-local time.
///
/// Offset-carrying values are converted to the server's zone first.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for fmt in ACCEPTED_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(ts);
        }
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Local).naive_local())
}

/// ISO-8601 rendering without offset; fractional seconds only when present.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// Half-open `[00:00 of day, 00:00 of next day)` bounds.
pub fn day_bounds(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = day.and_time(NaiveTime::MIN);
    let end = day
        .succ_opt()
        .map(|d| d.and_time(NaiveTime::MIN))
        .unwrap_or(NaiveDateTime::MAX);
    (start, end)
}
