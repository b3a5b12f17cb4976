//! Raw SQL statements against the `events` table.
//!
//! Functions here speak strings: timestamps go in and come out in the fixed
//! storage format. Parsing into typed events happens in `record_to_event`.

use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::filter::EventFilter;
use crate::utils::time::{DATE_FORMAT, parse_timestamp};
use rusqlite::types::ToSql;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// One `events` row exactly as stored.
#[derive(Debug, Clone)]
pub struct EventRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: Option<String>,
}

const SELECT_COLUMNS: &str = "SELECT id, event_name, description, start_time, end_time FROM events";

pub fn map_row(row: &Row) -> Result<EventRecord> {
    Ok(EventRecord {
        id: row.get("id")?,
        name: row.get("event_name")?,
        description: row.get("description")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
    })
}

/// Convert a stored row into an `Event`, rejecting unparsable timestamps.
pub fn record_to_event(rec: EventRecord) -> AppResult<Event> {
    let start_time = parse_timestamp(&rec.start_time)?;
    let end_time = match rec.end_time.as_deref() {
        Some(s) => Some(parse_timestamp(s)?),
        None => None,
    };

    Ok(Event {
        id: rec.id,
        name: rec.name,
        description: rec.description,
        start_time,
        end_time,
    })
}

pub fn insert_event(
    conn: &Connection,
    name: &str,
    description: Option<&str>,
    start_time: &str,
) -> Result<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO events (event_name, description, start_time)
         VALUES (?1, ?2, ?3)",
    )?;
    stmt.execute(params![name, description, start_time])?;
    Ok(conn.last_insert_rowid())
}

pub fn load_start_time(conn: &Connection, id: i64) -> Result<Option<String>> {
    conn.query_row(
        "SELECT start_time FROM events WHERE id = ?1",
        [id],
        |row| row.get(0),
    )
    .optional()
}

/// Returns the number of rows touched (0 or 1).
pub fn update_end_time(conn: &Connection, id: i64, end_time: &str) -> Result<usize> {
    conn.execute(
        "UPDATE events SET end_time = ?1 WHERE id = ?2",
        params![end_time, id],
    )
}

/// Returns the number of rows removed (0 or 1).
pub fn delete_event(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM events WHERE id = ?1", [id])
}

pub fn load_event(conn: &Connection, id: i64) -> Result<Option<EventRecord>> {
    let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
    conn.query_row(&sql, [id], map_row).optional()
}

/// All rows matching `filter`, most recent start first, equal starts in
/// creation order.
pub fn select_events(conn: &Connection, filter: &EventFilter) -> Result<Vec<EventRecord>> {
    let mut clauses: Vec<&str> = Vec::new();
    let mut values: Vec<String> = Vec::new();

    if let Some(d) = &filter.start_date {
        clauses.push("date(start_time) >= ?");
        values.push(d.format(DATE_FORMAT).to_string());
    }
    if let Some(d) = &filter.end_date {
        clauses.push("date(start_time) <= ?");
        values.push(d.format(DATE_FORMAT).to_string());
    }
    // instr() is case-sensitive and needs no wildcard escaping, unlike LIKE.
    if let Some(needle) = &filter.name_contains {
        clauses.push("instr(event_name, ?) > 0");
        values.push(needle.clone());
    }
    if let Some(needle) = &filter.description_contains {
        clauses.push("instr(COALESCE(description, ''), ?) > 0");
        values.push(needle.clone());
    }

    let where_sql = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };

    let sql = format!("{SELECT_COLUMNS}{where_sql} ORDER BY start_time DESC, id ASC");

    let params: Vec<&dyn ToSql> = values.iter().map(|s| s as &dyn ToSql).collect();

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn select_open_events(conn: &Connection) -> Result<Vec<EventRecord>> {
    let sql = format!("{SELECT_COLUMNS} WHERE end_time IS NULL ORDER BY start_time DESC, id DESC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_events(conn: &Connection) -> Result<(i64, i64)> {
    conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(CASE WHEN end_time IS NULL THEN 1 ELSE 0 END), 0)
         FROM events",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
}

pub fn start_time_range(conn: &Connection) -> Result<Option<(String, String)>> {
    conn.query_row(
        "SELECT MIN(start_time), MAX(start_time) FROM events",
        [],
        |row| {
            let first: Option<String> = row.get(0)?;
            let last: Option<String> = row.get(1)?;
            Ok(first.zip(last))
        },
    )
}
