//! Date cell resolution.
//!
//! A date cell resolves to a sortable timestamp: epoch milliseconds for
//! calendar dates (UTC when no offset is given) or the month rank for a full
//! month name. The classifier and the date comparator both go through
//! [`date_value`], so a cell that classified as a date always resolves.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use super::lookup::month_rank;

/// Date-only layouts, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%a, %B %d, %Y",
    "%A, %B %d, %Y",
    "%a %b %d %Y",
];

/// Date-time layouts without an offset, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M %p",
    "%B %d, %Y %H:%M",
    "%B %d, %Y %I:%M %p",
];

/// Layouts with a two-digit year, used only when no four-digit year is present.
const SHORT_YEAR_FORMATS: &[&str] = &["%m/%d/%y", "%m-%d-%y", "%B %d, %y"];

/// Parse a calendar date or date-time to epoch milliseconds.
///
/// Returns `None` for text that is not a valid calendar date, including
/// impossible dates such as `2023-02-30` and bare numbers such as `2024`.
pub fn parse_date_millis(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }
    // A lone number is a number, not a year.
    if trimmed
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+'))
        && !trimmed.contains('-')
    {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(millis(parsed.timestamp_millis()));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(millis(parsed.timestamp_millis()));
    }

    if !has_four_digit_run(trimmed) {
        return parse_short_year(trimmed);
    }

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(millis(parsed.and_utc().timestamp_millis()));
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return midnight_millis(parsed);
        }
    }

    parse_partial_date(trimmed)
}

/// `%Y` accepts any digit count, so short years must never reach the long layouts.
fn has_four_digit_run(value: &str) -> bool {
    value
        .split(|ch: char| !ch.is_ascii_digit())
        .any(|run| run.len() >= 4)
}

/// Two-digit years 00-49 are 2000-2049 and 50-99 are 1950-1999.
fn parse_short_year(value: &str) -> Option<f64> {
    let parsed = SHORT_YEAR_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())?;
    let two_digit = parsed.year().rem_euclid(100);
    let century = if two_digit < 50 { 2000 } else { 1900 };
    parsed.with_year(century + two_digit).and_then(midnight_millis)
}

/// Year-month forms ("2024-03", "March 2024") resolve to the first of the month.
fn parse_partial_date(value: &str) -> Option<f64> {
    let (year, month) = match value.split_once('-') {
        Some((year, month)) => {
            if year.len() != 4 || !(1..=2).contains(&month.len()) {
                return None;
            }
            (year, month.parse::<u32>().ok()?)
        }
        None => {
            let (name, year) = value.split_once(' ')?;
            (year.trim(), month_rank(name)?)
        }
    };
    if year.len() != 4 {
        return None;
    }
    let year = year.parse::<i32>().ok()?;

    NaiveDate::from_ymd_opt(year, month, 1).and_then(midnight_millis)
}

fn midnight_millis(date: NaiveDate) -> Option<f64> {
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| millis(midnight.and_utc().timestamp_millis()))
}

// Epoch milliseconds for any representable chrono date fit in f64's exact range.
#[allow(clippy::cast_precision_loss)]
fn millis(value: i64) -> f64 {
    value as f64
}

/// Resolve a cell to the value it sorts by in a date column.
///
/// Blank cells are negative infinity, full month names are their rank
/// (1-12), calendar dates are epoch milliseconds, anything else is `NaN`.
pub fn date_value(value: &str) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return f64::NEG_INFINITY;
    }
    if let Some(rank) = month_rank(trimmed) {
        return f64::from(rank);
    }
    parse_date_millis(trimmed).unwrap_or(f64::NAN)
}

/// Check whether a non-empty sample cell should make its column a date column.
pub fn is_date(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && date_value(trimmed).is_finite()
}
