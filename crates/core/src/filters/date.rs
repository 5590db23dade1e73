//! Date bound formatting for the report query.
//!
//! Bounds travel as text: the lower bound at the very start of its day, the
//! upper bound at the very end of its day.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Format of a lower date bound.
pub const DAY_START_FORMAT: &str = "%Y-%m-%d 00:00:00";

/// Format of an upper date bound.
pub const DAY_END_FORMAT: &str = "%Y-%m-%d 23:59:59";

/// Error returned when a date input cannot be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized date '{input}', expected YYYY-MM-DD or RFC 3339")]
pub struct DateParseError {
    /// The rejected input.
    pub input: String,
}

/// Formats `date` as a lower bound.
#[must_use]
pub fn day_start(date: NaiveDate) -> String {
    date.format(DAY_START_FORMAT).to_string()
}

/// Formats `date` as an upper bound.
#[must_use]
pub fn day_end(date: NaiveDate) -> String {
    date.format(DAY_END_FORMAT).to_string()
}

/// Returns the first day of the month containing `date`.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Reads a calendar date from user input.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and
/// RFC 3339 timestamps. Only the calendar date is kept; for RFC 3339 input it
/// is the date in the timestamp's own offset.
pub fn parse_date_input(input: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.date());
        }
    }

    Err(DateParseError {
        input: input.to_string(),
    })
}
