//! Timestamp utilities: the fixed `YYYY-MM-DD HH:MM:SS` storage format,
//! wall-clock "now" at second precision and `HH:MM:SS` elapsed formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime, Timelike};

/// Storage and display format of every timestamp (local wall-clock, no offset).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";

/// Parse a timestamp in exactly the storage format. chrono alone accepts
/// unpadded fields, so the parsed value must format back to the input.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let malformed = || AppError::MalformedTimestamp(s.to_string());
    let parsed = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map_err(|_| malformed())?;
    if format_timestamp(&parsed) != s {
        return Err(malformed());
    }
    Ok(parsed)
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time, truncated to the second.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Whole seconds from `start` to `end`; sub-second parts are discarded.
pub fn elapsed_seconds(start: &NaiveDateTime, end: &NaiveDateTime) -> i64 {
    (*end - *start).num_seconds()
}

/// Render seconds as `HH:MM:SS`. Hours are not wrapped at 24 and a negative
/// input gets a leading `-`.
pub fn format_hms(total_seconds: i64) -> String {
    let sign = if total_seconds < 0 { "-" } else { "" };
    let s = total_seconds.unsigned_abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}
