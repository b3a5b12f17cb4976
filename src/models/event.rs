use crate::errors::AppError;
use crate::utils::time::{elapsed_seconds, format_timestamp};
use chrono::NaiveDateTime;

/// One tracked activity instance.
///
/// `end_time == None` is the only representation of "in progress".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,                         // ⇔ events.id (AUTOINCREMENT, never reused)
    pub name: String,                    // ⇔ events.event_name
    pub description: Option<String>,     // ⇔ events.description (NULL when absent)
    pub start_time: NaiveDateTime,       // ⇔ events.start_time (TEXT "YYYY-MM-DD HH:MM:SS")
    pub end_time: Option<NaiveDateTime>, // ⇔ events.end_time (NULL while in progress)
}

impl Event {
    pub fn is_in_progress(&self) -> bool {
        self.end_time.is_none()
    }

    /// Elapsed whole seconds, `None` while the event is still open.
    pub fn elapsed_seconds(&self) -> Option<i64> {
        self.end_time
            .as_ref()
            .map(|end| elapsed_seconds(&self.start_time, end))
    }

    pub fn end_str(&self) -> Option<String> {
        self.end_time.as_ref().map(format_timestamp)
    }
}

/// Result of a bulk query: the rows that parsed, in the store's native order,
/// plus the ids of stored rows whose timestamps did not.
#[derive(Debug, Default)]
pub struct QueryOutcome {
    pub events: Vec<Event>,
    pub malformed: Vec<(i64, AppError)>,
}

impl QueryOutcome {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
