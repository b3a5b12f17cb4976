//! Derived, display-only fields computed from stored events.
//!
//! Every front end renders the same values: date/time split, "N/A" for a
//! missing end, and either `HH:MM:SS` or the "in progress" sentinel for the
//! duration. None of these are ever persisted.

use crate::models::event::Event;
use crate::utils::time::{DATE_FORMAT, TIME_OF_DAY_FORMAT, elapsed_seconds, format_hms};
use chrono::NaiveDateTime;
use std::fmt;

/// Placeholder for the end date/time of an open event.
pub const NOT_AVAILABLE: &str = "N/A";
/// Duration sentinel for an open event.
pub const IN_PROGRESS: &str = "in progress";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationCell {
    InProgress,
    /// Whole elapsed seconds. Negative only for rows stored with an end
    /// before their start.
    Elapsed(i64),
}

impl fmt::Display for DurationCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationCell::InProgress => f.write_str(IN_PROGRESS),
            DurationCell::Elapsed(secs) => f.write_str(&format_hms(*secs)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub duration: DurationCell,
}

impl DisplayRow {
    pub fn from_event(ev: &Event) -> Self {
        let duration = match &ev.end_time {
            Some(end) => DurationCell::Elapsed(elapsed_seconds(&ev.start_time, end)),
            None => DurationCell::InProgress,
        };

        Self {
            id: ev.id,
            name: ev.name.clone(),
            description: ev.description.clone().unwrap_or_default(),
            start: ev.start_time,
            end: ev.end_time,
            duration,
        }
    }

    pub fn start_date(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn start_time_of_day(&self) -> String {
        self.start.format(TIME_OF_DAY_FORMAT).to_string()
    }

    pub fn end_date(&self) -> String {
        self.end
            .map(|e| e.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn end_time_of_day(&self) -> String {
        self.end
            .map(|e| e.format(TIME_OF_DAY_FORMAT).to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn duration_str(&self) -> String {
        self.duration.to_string()
    }

    pub fn is_in_progress(&self) -> bool {
        self.duration == DurationCell::InProgress
    }
}

pub fn build_rows(events: &[Event]) -> Vec<DisplayRow> {
    events.iter().map(DisplayRow::from_event).collect()
}

/// Live elapsed time of an open event, as shown by the status timer.
pub fn running_elapsed(ev: &Event, now: &NaiveDateTime) -> String {
    format_hms(elapsed_seconds(&ev.start_time, now).max(0))
}
