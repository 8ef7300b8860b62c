//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Text shown for a date that cannot be parsed, as a browser would print it
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse a front-matter date string in the common formats
///
/// Dates carrying an offset keep the wall-clock date they were written with,
/// so output does not depend on the timezone of the build machine.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%B %d, %Y",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
        // Try parsing date only
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    None
}

/// Format a date the way `Date#toLocaleDateString()` does for en-US (`M/D/YYYY`)
///
/// # Examples
/// ```ignore
/// locale_date(Some("2024-01-15")) // -> "1/15/2024"
/// locale_date(None)               // -> "Invalid Date"
/// ```
pub fn locale_date(value: Option<&str>) -> String {
    value
        .and_then(parse_date)
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}
