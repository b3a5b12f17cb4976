use crate::db::migrate::{applied_versions, pending_count};
use crate::db::queries::{count_events, start_time_range};
use crate::db::store::EventStore;
use crate::errors::AppResult;
use ansi_term::Colour::{Cyan, Fixed, Green, Yellow};
use std::fs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbInfo {
    pub file_size: u64,
    pub total_events: i64,
    pub in_progress: i64,
    pub first_start: Option<String>,
    pub last_start: Option<String>,
    pub migrations_applied: usize,
    pub migrations_pending: usize,
}

pub fn collect(store: &EventStore) -> AppResult<DbInfo> {
    let conn = store.conn();

    let file_size = store
        .path()
        .and_then(|p| fs::metadata(p).ok())
        .map(|m| m.len())
        .unwrap_or(0);

    let (total_events, in_progress) = count_events(conn)?;
    let range = start_time_range(conn)?;

    Ok(DbInfo {
        file_size,
        total_events,
        in_progress,
        first_start: range.as_ref().map(|(f, _)| f.clone()),
        last_start: range.map(|(_, l)| l),
        migrations_applied: applied_versions(conn)?.len(),
        migrations_pending: pending_count(conn)?,
    })
}

pub fn print_db_info(store: &EventStore, db_path: &str) -> AppResult<()> {
    let info = collect(store)?;
    let label = |s: &str| Cyan.paint(format!("• {s}:")).to_string();
    let missing = || Fixed(8).paint("--").to_string();

    println!();
    println!("{} {}", label("File"), Yellow.paint(db_path));
    println!(
        "{} {:.2} KB",
        label("Size"),
        info.file_size as f64 / 1024.0
    );
    println!("{} {}", label("Total events"), Green.paint(info.total_events.to_string()));
    println!("{} {}", label("In progress"), Yellow.paint(info.in_progress.to_string()));
    println!("{}", label("Start range"));
    println!("    from: {}", info.first_start.clone().unwrap_or_else(missing));
    println!("    to:   {}", info.last_start.clone().unwrap_or_else(missing));
    println!(
        "{} {} applied, {} pending",
        label("Migrations"),
        info.migrations_applied,
        info.migrations_pending
    );
    println!();

    Ok(())
}
