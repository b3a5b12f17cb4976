//! The Event Store: durable, queryable storage of events behind four
//! synchronous operations (create, finish, query, delete).
//!
//! One store owns one SQLite connection. Every operation is a single
//! statement, so it either completes or fails as a whole; no operation
//! spans a transaction across calls.

use crate::db::log::ttlog;
use crate::db::migrate::run_pending_migrations;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, QueryOutcome};
use crate::models::filter::EventFilter;
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::NaiveDateTime;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub struct EventStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl EventStore {
    /// Open (or create) the database file at `path` and bring its schema up
    /// to date.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        run_pending_migrations(&conn)?;

        tracing::debug!(path = %path.display(), "event store opened");

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Same as `open`, on a private in-memory database.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn, path: None })
    }

    /// Close the underlying connection, surfacing any error SQLite reports.
    /// Dropping the store closes it too, silently.
    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, e)| AppError::Db(e))?;
        tracing::debug!("event store closed");
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Raw connection, for maintenance commands (stats, integrity check).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Insert a new in-progress event and return its id.
    ///
    /// The caller is expected to have trimmed `name`; the store only refuses
    /// a blank one. An empty description is stored as absent.
    pub fn create(
        &self,
        name: &str,
        description: Option<&str>,
        start_time: NaiveDateTime,
    ) -> AppResult<i64> {
        if name.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "event name must not be empty".to_string(),
            ));
        }

        let description = description.filter(|d| !d.trim().is_empty());
        let start = format_timestamp(&start_time);

        let id = queries::insert_event(&self.conn, name, description, &start)?;
        tracing::debug!(id, event_name = name, start = %start, "event created");
        Ok(id)
    }

    /// Set `end_time` on an existing event.
    ///
    /// A second call on the same id overwrites the previous end time.
    /// An end time earlier than the stored start time is refused.
    pub fn finish(&self, id: i64, end_time: NaiveDateTime) -> AppResult<()> {
        let start = queries::load_start_time(&self.conn, id)?.ok_or(AppError::NotFound(id))?;
        let start = parse_timestamp(&start)?;

        if end_time < start {
            return Err(AppError::InvalidArgument(format!(
                "end time {} is before start time {} of event #{}",
                format_timestamp(&end_time),
                format_timestamp(&start),
                id
            )));
        }

        let end = format_timestamp(&end_time);
        let touched = queries::update_end_time(&self.conn, id, &end)?;
        if touched == 0 {
            // Row vanished between the two statements.
            return Err(AppError::NotFound(id));
        }

        tracing::debug!(id, end = %end, "event finished");
        Ok(())
    }

    /// Snapshot of all events matching `filter`, most recent start first.
    ///
    /// Rows whose stored timestamps fail to parse are logged, skipped and
    /// reported in `QueryOutcome::malformed`; they never abort the listing.
    pub fn query(&self, filter: &EventFilter) -> AppResult<QueryOutcome> {
        let records = queries::select_events(&self.conn, filter)?;

        let mut outcome = QueryOutcome::default();
        for rec in records {
            let id = rec.id;
            match queries::record_to_event(rec) {
                Ok(ev) => outcome.events.push(ev),
                Err(e) => {
                    tracing::warn!(id, error = %e, "skipping malformed event row");
                    outcome.malformed.push((id, e));
                }
            }
        }

        tracing::debug!(
            rows = outcome.events.len(),
            skipped = outcome.malformed.len(),
            "events queried"
        );
        Ok(outcome)
    }

    /// Remove an event. Returns `false` when no such row existed, which is
    /// not an error.
    pub fn delete(&self, id: i64) -> AppResult<bool> {
        let removed = queries::delete_event(&self.conn, id)? > 0;
        if removed {
            tracing::debug!(id, "event deleted");
        } else {
            tracing::debug!(id, "delete of missing event ignored");
        }
        Ok(removed)
    }

    pub fn get(&self, id: i64) -> AppResult<Option<Event>> {
        queries::load_event(&self.conn, id)?
            .map(queries::record_to_event)
            .transpose()
    }

    /// In-progress events, most recently started first. Malformed rows are
    /// skipped the same way `query` skips them.
    pub fn open_events(&self) -> AppResult<Vec<Event>> {
        let mut out = Vec::new();
        for rec in queries::select_open_events(&self.conn)? {
            let id = rec.id;
            match queries::record_to_event(rec) {
                Ok(ev) => out.push(ev),
                Err(e) => tracing::warn!(id, error = %e, "skipping malformed event row"),
            }
        }
        Ok(out)
    }

    /// Append to the internal audit log. Failures are logged, never returned.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.conn, operation, target, message) {
            tracing::warn!(operation, error = %e, "failed to write internal log");
        }
    }
}
