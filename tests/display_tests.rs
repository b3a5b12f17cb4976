use chrono::NaiveDate;
use rtimetracker::core::display::{DisplayRow, DurationCell, IN_PROGRESS, NOT_AVAILABLE, build_rows};
use rtimetracker::models::event::Event;
use rtimetracker::utils::time::{elapsed_seconds, format_hms, parse_timestamp};

mod common;
use common::ts;

fn event(id: i64, start: &str, end: Option<&str>) -> Event {
    Event {
        id,
        name: format!("event {id}"),
        description: None,
        start_time: ts(start),
        end_time: end.map(ts),
    }
}

#[test]
fn test_duration_within_a_minute() {
    let row = DisplayRow::from_event(&event(1, "2024-01-01 10:00:00", Some("2024-01-01 10:00:45")));
    assert_eq!(row.duration_str(), "00:00:45");
}

#[test]
fn test_duration_across_midnight() {
    let row = DisplayRow::from_event(&event(1, "2024-01-01 23:00:00", Some("2024-01-02 05:30:10")));
    assert_eq!(row.duration_str(), "06:30:10");
    assert_eq!(row.end_date(), "2024-01-02");
    assert_eq!(row.end_time_of_day(), "05:30:10");
}

#[test]
fn test_hours_are_not_wrapped_at_a_day() {
    let row = DisplayRow::from_event(&event(1, "2024-01-01 08:00:00", Some("2024-01-02 14:00:00")));
    assert_eq!(row.duration, DurationCell::Elapsed(30 * 3600));
    assert_eq!(row.duration_str(), "30:00:00");
}

#[test]
fn test_in_progress_derived_fields() {
    let row = DisplayRow::from_event(&event(7, "2024-06-01 09:05:03", None));

    assert_eq!(row.start_date(), "2024-06-01");
    assert_eq!(row.start_time_of_day(), "09:05:03");
    assert_eq!(row.end_date(), NOT_AVAILABLE);
    assert_eq!(row.end_time_of_day(), "N/A");
    assert_eq!(row.duration_str(), IN_PROGRESS);
    assert_eq!(row.duration_str(), "in progress");
    assert!(row.is_in_progress());
}

#[test]
fn test_missing_description_renders_empty() {
    let mut ev = event(3, "2024-06-01 09:00:00", None);
    let rows = build_rows(&[ev.clone()]);
    assert_eq!(rows[0].description, "");

    ev.description = Some("notes".into());
    assert_eq!(DisplayRow::from_event(&ev).description, "notes");
}

#[test]
fn test_fractional_seconds_are_floored() {
    let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let start = d.and_hms_milli_opt(10, 0, 0, 0).unwrap();
    let end = d.and_hms_milli_opt(10, 0, 44, 900).unwrap();

    assert_eq!(elapsed_seconds(&start, &end), 44);
    assert_eq!(format_hms(elapsed_seconds(&start, &end)), "00:00:44");
}

#[test]
fn test_negative_duration_from_legacy_row_is_signed() {
    let row = DisplayRow::from_event(&event(1, "2024-01-01 10:05:00", Some("2024-01-01 10:00:00")));
    assert_eq!(row.duration, DurationCell::Elapsed(-300));
    assert_eq!(row.duration_str(), "-00:05:00");
}

#[test]
fn test_parse_timestamp_rejects_other_formats() {
    assert!(parse_timestamp("2024-01-01 10:00:00").is_ok());
    assert!(parse_timestamp("2024-01-01T10:00:00").is_err());
    assert!(parse_timestamp("2024-01-01 10:00").is_err());
    assert!(parse_timestamp("").is_err());

    // unpadded fields and surrounding blanks are not the storage format
    assert!(parse_timestamp("2024-1-5 09:00:00").is_err());
    assert!(parse_timestamp("2024-01-05 9:0:0").is_err());
    assert!(parse_timestamp(" 2024-01-05 09:00:00").is_err());
    assert!(parse_timestamp("2024-01-05 09:00:00 ").is_err());
}
