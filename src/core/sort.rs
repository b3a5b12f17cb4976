//! Client-side column sort over a materialized result set.
//!
//! The key for each column is data: `SORT_TABLE` maps a column to the
//! function extracting its key. Sorting is stable, so rows with equal keys
//! keep the order they arrived in (the store's native order).

use crate::core::display::{DisplayRow, DurationCell};
use chrono::NaiveDateTime;
use clap::ValueEnum;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum SortColumn {
    Id,
    Name,
    #[value(alias = "desc")]
    Description,
    StartDate,
    StartTime,
    EndDate,
    EndTime,
    Duration,
}

impl SortColumn {
    pub const ALL: [SortColumn; 8] = [
        SortColumn::Id,
        SortColumn::Name,
        SortColumn::Description,
        SortColumn::StartDate,
        SortColumn::StartTime,
        SortColumn::EndDate,
        SortColumn::EndTime,
        SortColumn::Duration,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Name => "Name",
            SortColumn::Description => "Description",
            SortColumn::StartDate => "Start date",
            SortColumn::StartTime => "Start time",
            SortColumn::EndDate => "End date",
            SortColumn::EndTime => "End time",
            SortColumn::Duration => "Duration",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Int(i64),
    Timestamp(NaiveDateTime),
    /// `None` is an open event and orders before every finite duration.
    Seconds(Option<i64>),
    Text(String),
}

fn key_id(r: &DisplayRow) -> SortKey {
    SortKey::Int(r.id)
}

fn key_start(r: &DisplayRow) -> SortKey {
    SortKey::Timestamp(r.start)
}

fn key_end(r: &DisplayRow) -> SortKey {
    SortKey::Timestamp(r.end.unwrap_or(NaiveDateTime::MIN))
}

fn key_duration(r: &DisplayRow) -> SortKey {
    match r.duration {
        DurationCell::InProgress => SortKey::Seconds(None),
        DurationCell::Elapsed(s) => SortKey::Seconds(Some(s)),
    }
}

fn key_name(r: &DisplayRow) -> SortKey {
    SortKey::Text(r.name.to_lowercase())
}

fn key_description(r: &DisplayRow) -> SortKey {
    SortKey::Text(r.description.to_lowercase())
}

type KeyFn = fn(&DisplayRow) -> SortKey;

/// Column → key extractor.
pub const SORT_TABLE: &[(SortColumn, KeyFn)] = &[
    (SortColumn::Id, key_id),
    (SortColumn::Name, key_name),
    (SortColumn::Description, key_description),
    (SortColumn::StartDate, key_start),
    (SortColumn::StartTime, key_start),
    (SortColumn::EndDate, key_end),
    (SortColumn::EndTime, key_end),
    (SortColumn::Duration, key_duration),
];

pub fn key_fn(column: SortColumn) -> KeyFn {
    SORT_TABLE
        .iter()
        .find(|(c, _)| *c == column)
        .map(|(_, f)| *f)
        .unwrap_or(key_id)
}

/// Current sort column and direction of a result view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub descending: bool,
}

impl Default for SortState {
    /// Most recent start first, same as the store's native order.
    fn default() -> Self {
        Self {
            column: SortColumn::StartDate,
            descending: true,
        }
    }
}

impl SortState {
    pub fn new(column: SortColumn) -> Self {
        Self {
            column,
            descending: false,
        }
    }

    /// Header selection: the same column flips direction, a new column
    /// starts ascending.
    pub fn select(&mut self, column: SortColumn) {
        if self.column == column {
            self.descending = !self.descending;
        } else {
            self.column = column;
            self.descending = false;
        }
    }

    pub fn apply(&self, rows: &mut [DisplayRow]) {
        sort_rows(rows, self.column, self.descending);
    }

    /// Arrow shown next to the header of the sorted column.
    pub fn indicator(&self, column: SortColumn) -> &'static str {
        match (self.column == column, self.descending) {
            (false, _) => "",
            (true, true) => " ▼",
            (true, false) => " ▲",
        }
    }
}

pub fn sort_rows(rows: &mut [DisplayRow], column: SortColumn, descending: bool) {
    let key = key_fn(column);
    rows.sort_by(|a, b| {
        let ord: Ordering = key(a).cmp(&key(b));
        if descending { ord.reverse() } else { ord }
    });
}
