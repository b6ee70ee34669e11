//! Timestamp parsing and display formatting
//!
//! The forecast provider reports naive ISO-8601 timestamps already
//! expressed in the location's timezone (e.g. "2026-08-06T14:00"), so the
//! labels here format those values directly. The header clock formats the
//! viewer's wall clock instead, which the event loop refreshes once a
//! minute.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Errors raised when an input cannot be parsed as a valid date-time
#[derive(Debug, Error)]
pub enum FormatError {
    /// Input is not an ISO-8601 timestamp
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Input is not an ISO-8601 date
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Parse an ISO-8601 timestamp (e.g. "2026-08-06T14:00") to a NaiveDateTime
///
/// Accepts minute or second precision.
pub fn parse_instant(input: &str) -> Result<NaiveDateTime, FormatError> {
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| FormatError::InvalidTimestamp(input.to_string()))
}

/// Parse an ISO-8601 date (e.g. "2026-08-06") to a NaiveDate
pub fn parse_day(input: &str) -> Result<NaiveDate, FormatError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| FormatError::InvalidDate(input.to_string()))
}

/// Header clock label: "h:mm AM/PM"
pub fn clock_label(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Hourly slot label: "h AM/PM", no minutes
pub fn hour_label(time: NaiveDateTime) -> String {
    time.format("%-I %p").to_string()
}

/// Daily row label: "Today" for the first row, otherwise "Www, Mon D"
pub fn day_label(date: NaiveDate, is_first: bool) -> String {
    if is_first {
        "Today".to_string()
    } else {
        date.format("%a, %b %-d").to_string()
    }
}

/// Clock label for an ISO-8601 timestamp string
#[allow(dead_code)]
pub fn format_clock(input: &str) -> Result<String, FormatError> {
    Ok(clock_label(parse_instant(input)?.time()))
}

/// Hour label for an ISO-8601 timestamp string
#[allow(dead_code)]
pub fn format_hour_label(input: &str) -> Result<String, FormatError> {
    Ok(hour_label(parse_instant(input)?))
}

/// Day label for an ISO-8601 date string
#[allow(dead_code)]
pub fn format_day_label(input: &str, is_first: bool) -> Result<String, FormatError> {
    Ok(day_label(parse_day(input)?, is_first))
}
