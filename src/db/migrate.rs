//! Schema bootstrap and versioned migrations.
//!
//! Applied versions are recorded in the `log` table as
//! `operation = 'migration_applied'`, so every step runs at most once per
//! database file. The `events` layout matches files written by earlier
//! releases, which are picked up as-is.

use crate::errors::{AppError, AppResult};
use crate::utils::time::{format_timestamp, now};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// Create the `events` table. AUTOINCREMENT keeps ids from being reused
/// after the highest row is deleted.
fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            event_name  TEXT NOT NULL,
            description TEXT,
            start_time  TEXT NOT NULL,
            end_time    TEXT
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        [format_timestamp(&now()).as_str(), version, message],
    )?;
    Ok(())
}

struct Migration {
    version: &'static str,
    sql: &'static str,
    message: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_index_events_start_time",
        sql: "CREATE INDEX IF NOT EXISTS idx_events_start_time ON events(start_time);",
        message: "Added start_time index to events",
    },
    Migration {
        version: "20250301_0002_blank_description_to_null",
        sql: "UPDATE events SET description = NULL WHERE TRIM(description) = '';",
        message: "Normalized blank descriptions to NULL",
    },
];

/// Public entry point: create missing tables and run all pending migrations.
///
/// Invoked by `EventStore::open`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;
    create_events_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        conn.execute_batch(m.sql)
            .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;
        mark_applied(conn, m.version, m.message)?;

        tracing::info!(version = m.version, "migration applied: {}", m.message);
    }

    Ok(())
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn pending_count(conn: &Connection) -> AppResult<usize> {
    let mut n = 0;
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            n += 1;
        }
    }
    Ok(n)
}
