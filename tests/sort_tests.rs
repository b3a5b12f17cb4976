use rtimetracker::core::display::{DisplayRow, build_rows};
use rtimetracker::core::sort::{SORT_TABLE, SortColumn, SortState, sort_rows};
use rtimetracker::models::event::Event;

mod common;
use common::ts;

fn ev(id: i64, name: &str, start: &str, end: Option<&str>) -> Event {
    Event {
        id,
        name: name.to_string(),
        description: Some(format!("{name} notes")),
        start_time: ts(start),
        end_time: end.map(ts),
    }
}

fn sample() -> Vec<DisplayRow> {
    build_rows(&[
        ev(1, "beta", "2024-01-03 09:00:00", Some("2024-01-03 09:10:00")),
        ev(2, "Alpha", "2024-01-02 09:00:00", None),
        ev(3, "gamma", "2024-01-01 09:00:00", Some("2024-01-01 09:00:00")),
        ev(4, "delta", "2024-01-04 09:00:00", Some("2024-01-04 11:00:00")),
        ev(5, "epsilon", "2024-01-05 09:00:00", None),
    ])
}

fn ids(rows: &[DisplayRow]) -> Vec<i64> {
    rows.iter().map(|r| r.id).collect()
}

#[test]
fn test_every_column_has_a_key() {
    for col in SortColumn::ALL {
        assert!(
            SORT_TABLE.iter().any(|(c, _)| *c == col),
            "missing sort key for {col:?}"
        );
    }
}

#[test]
fn test_duration_ascending_puts_in_progress_first() {
    let mut rows = sample();
    sort_rows(&mut rows, SortColumn::Duration, false);

    // in-progress rows keep their relative order, then 0s, 10min, 2h
    assert_eq!(ids(&rows), vec![2, 5, 3, 1, 4]);
}

#[test]
fn test_end_column_treats_missing_end_as_minimum() {
    let mut rows = sample();
    sort_rows(&mut rows, SortColumn::EndDate, false);
    assert_eq!(ids(&rows), vec![2, 5, 3, 1, 4]);

    sort_rows(&mut rows, SortColumn::EndTime, true);
    assert_eq!(ids(&rows), vec![4, 1, 3, 2, 5]);
}

#[test]
fn test_name_sort_ignores_case() {
    let mut rows = sample();
    sort_rows(&mut rows, SortColumn::Name, false);

    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "beta", "delta", "epsilon", "gamma"]);
}

#[test]
fn test_start_columns_share_the_combined_timestamp_key() {
    let mut by_date = sample();
    let mut by_time = sample();
    sort_rows(&mut by_date, SortColumn::StartDate, false);
    sort_rows(&mut by_time, SortColumn::StartTime, false);

    assert_eq!(ids(&by_date), vec![3, 2, 1, 4, 5]);
    assert_eq!(ids(&by_date), ids(&by_time));
}

#[test]
fn test_selecting_same_column_toggles_and_new_column_resets() {
    let mut state = SortState::new(SortColumn::Id);
    assert!(!state.descending);

    state.select(SortColumn::Id);
    assert!(state.descending);
    assert_eq!(state.indicator(SortColumn::Id), " ▼");

    state.select(SortColumn::Duration);
    assert_eq!(state.column, SortColumn::Duration);
    assert!(!state.descending);
    assert_eq!(state.indicator(SortColumn::Duration), " ▲");
    assert_eq!(state.indicator(SortColumn::Id), "");

    let mut rows = sample();
    state.select(SortColumn::Duration);
    state.apply(&mut rows);
    assert_eq!(ids(&rows), vec![4, 1, 3, 2, 5]);
}

#[test]
fn test_default_state_matches_store_order() {
    let state = SortState::default();
    assert_eq!(state.column, SortColumn::StartDate);
    assert!(state.descending);

    let mut rows = sample();
    state.apply(&mut rows);
    assert_eq!(ids(&rows), vec![5, 4, 1, 2, 3]);
}
