// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Conversion between the backend's `YYYY-MM-DDTHH:MM:SS` timestamps and the
//! separate date and time fields of the event form.
//!
//! Timestamps are local wall-clock values. Nothing here touches time zones, so a
//! date never shifts by a day on its way through the form.

use jiff::civil::{Date, DateTime, Time};

/// Errors from splitting or assembling a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    /// The timestamp has no date/time separator.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// The date part is not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date, expected YYYY-MM-DD: {0}")]
    InvalidDate(String),

    /// The time part is not a valid `HH:MM` wall-clock time.
    #[error("Invalid time, expected HH:MM: {0}")]
    InvalidTime(String),
}

/// Splits a stored timestamp into the form's date and `HH:MM` time.
///
/// The date is read as a calendar y/m/d. The time is the first five characters
/// after the separator, taken verbatim once validated.
///
/// # Errors
///
/// Returns an error if either part is malformed.
pub fn split_timestamp(stamp: &str) -> Result<(Date, String), DateTimeError> {
    let (date, time) = stamp
        .trim()
        .split_once(['T', ' '])
        .ok_or_else(|| DateTimeError::InvalidTimestamp(stamp.to_string()))?;

    let date = parse_date(date)?;
    let time = time
        .get(..5)
        .filter(|t| parse_time(t).is_ok())
        .ok_or_else(|| DateTimeError::InvalidTime(time.to_string()))?;

    Ok((date, time.to_string()))
}

/// Assembles a date and an `HH:MM` time into `YYYY-MM-DDTHH:MM:00`.
///
/// # Errors
///
/// Returns an error if the time is malformed.
pub fn combine_timestamp(date: Date, time: &str) -> Result<String, DateTimeError> {
    let time = parse_time(time)?;
    Ok(format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:00",
        date.year(),
        date.month(),
        date.day(),
        time.hour(),
        time.minute()
    ))
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns an error if the text is not a valid date.
pub fn parse_date(s: &str) -> Result<Date, DateTimeError> {
    let invalid = || DateTimeError::InvalidDate(s.to_string());

    let mut parts = s.trim().splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let year: i16 = year.parse().map_err(|_| invalid())?;
    let month: i8 = month.parse().map_err(|_| invalid())?;
    let day: i8 = day.parse().map_err(|_| invalid())?;
    Date::new(year, month, day).map_err(|_| invalid())
}

/// Parses an `HH:MM` wall-clock time.
///
/// # Errors
///
/// Returns an error if the text is not a valid time.
pub fn parse_time(s: &str) -> Result<Time, DateTimeError> {
    let invalid = || DateTimeError::InvalidTime(s.to_string());

    let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return Err(invalid());
    }

    let hour: i8 = hour.parse().map_err(|_| invalid())?;
    let minute: i8 = minute.parse().map_err(|_| invalid())?;
    Time::new(hour, minute, 0, 0).map_err(|_| invalid())
}

/// Long form for a detail view, e.g. `Monday, March 10, 2025 at 2:30 PM`.
///
/// Falls back to the raw text if it is not a timestamp.
#[must_use]
pub fn format_long(stamp: &str) -> String {
    match stamp.parse::<DateTime>() {
        Ok(dt) => dt.strftime("%A, %B %-d, %Y at %-I:%M %p").to_string(),
        Err(_) => stamp.to_string(),
    }
}

/// Short form for lists, e.g. `Mon, Mar 10, 2025, 02:30 PM`.
///
/// Falls back to the raw text if it is not a timestamp.
#[must_use]
pub fn format_short(stamp: &str) -> String {
    match stamp.parse::<DateTime>() {
        Ok(dt) => dt.strftime("%a, %b %-d, %Y, %I:%M %p").to_string(),
        Err(_) => stamp.to_string(),
    }
}
