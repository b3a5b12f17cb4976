//! User intents that drive the store: start a timer, finish it, check on
//! what is running.

use crate::core::display::running_elapsed;
use crate::db::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::utils::time::elapsed_seconds;
use chrono::NaiveDateTime;

/// Width of the break-reminder window after the threshold is reached.
pub const REMINDER_WINDOW_MINUTES: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishOutcome {
    pub event: Event,
    /// End time that was overwritten, if the event had already been finished.
    pub previous_end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningEvent {
    pub event: Event,
    pub elapsed: String,
    pub reminder_due: bool,
}

pub struct TrackerLogic;

impl TrackerLogic {
    /// Start a new event at `at`. Name and description are trimmed; a blank
    /// description is dropped.
    pub fn start(
        store: &EventStore,
        name: &str,
        description: Option<&str>,
        at: NaiveDateTime,
    ) -> AppResult<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidArgument(
                "event name is required".to_string(),
            ));
        }

        let description = description.map(str::trim).filter(|d| !d.is_empty());

        let id = store.create(name, description, at)?;
        store.audit("start", &format!("#{id}"), &format!("Started '{name}'"));
        Ok(id)
    }

    /// Finish `id`, or the most recently started open event when `id` is None.
    pub fn finish(
        store: &EventStore,
        id: Option<i64>,
        at: NaiveDateTime,
    ) -> AppResult<FinishOutcome> {
        let target = match id {
            Some(id) => store.get(id)?.ok_or(AppError::NotFound(id))?,
            None => store
                .open_events()?
                .into_iter()
                .next()
                .ok_or(AppError::NothingInProgress)?,
        };

        store.finish(target.id, at)?;

        let event = store.get(target.id)?.ok_or(AppError::NotFound(target.id))?;
        store.audit(
            "finish",
            &format!("#{}", event.id),
            &format!("Finished '{}'", event.name),
        );

        Ok(FinishOutcome {
            event,
            previous_end: target.end_time,
        })
    }

    /// Open events with their live elapsed time at `now`.
    pub fn running(
        store: &EventStore,
        now: NaiveDateTime,
        reminder_minutes: u32,
    ) -> AppResult<Vec<RunningEvent>> {
        Ok(store
            .open_events()?
            .into_iter()
            .map(|event| {
                let secs = elapsed_seconds(&event.start_time, &now);
                RunningEvent {
                    elapsed: running_elapsed(&event, &now),
                    reminder_due: reminder_due(secs, reminder_minutes),
                    event,
                }
            })
            .collect())
    }
}

/// True while `elapsed_secs` lies in `[threshold, threshold + window)`.
/// A threshold of 0 disables the reminder.
pub fn reminder_due(elapsed_secs: i64, reminder_minutes: u32) -> bool {
    if reminder_minutes == 0 {
        return false;
    }
    let from = i64::from(reminder_minutes) * 60;
    let to = from + REMINDER_WINDOW_MINUTES * 60;
    (from..to).contains(&elapsed_secs)
}
