use rtimetracker::config::Config;
use rtimetracker::core::del::DeleteLogic;
use rtimetracker::core::tracker::{TrackerLogic, reminder_due};
use rtimetracker::db::log::load_log;
use rtimetracker::errors::AppError;
use rtimetracker::utils::time::parse_timestamp;

mod common;
use common::{TestEnv, memory_store, ts};

#[test]
fn test_start_trims_name_and_drops_blank_description() {
    let store = memory_store();

    let id = TrackerLogic::start(&store, "  deep work  ", Some("   "), ts("2024-01-01 09:00:00")).unwrap();
    let ev = store.get(id).unwrap().unwrap();

    assert_eq!(ev.name, "deep work");
    assert_eq!(ev.description, None);
}

#[test]
fn test_start_requires_a_name() {
    let store = memory_store();
    let err = TrackerLogic::start(&store, "\t", None, ts("2024-01-01 09:00:00")).unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));
}

#[test]
fn test_finish_without_id_closes_most_recent_open_event() {
    let store = memory_store();
    let first = TrackerLogic::start(&store, "first", None, ts("2024-01-01 09:00:00")).unwrap();
    let second = TrackerLogic::start(&store, "second", None, ts("2024-01-01 09:30:00")).unwrap();

    let outcome = TrackerLogic::finish(&store, None, ts("2024-01-01 10:00:00")).unwrap();

    assert_eq!(outcome.event.id, second);
    assert_eq!(outcome.event.elapsed_seconds(), Some(30 * 60));
    assert_eq!(outcome.previous_end, None);
    assert!(store.get(first).unwrap().unwrap().is_in_progress());
}

#[test]
fn test_finish_reports_overwritten_end_time() {
    let store = memory_store();
    let id = TrackerLogic::start(&store, "review", None, ts("2024-01-01 09:00:00")).unwrap();
    TrackerLogic::finish(&store, Some(id), ts("2024-01-01 09:20:00")).unwrap();

    let again = TrackerLogic::finish(&store, Some(id), ts("2024-01-01 09:45:00")).unwrap();
    assert_eq!(again.previous_end, Some(ts("2024-01-01 09:20:00")));
    assert_eq!(again.event.end_time, Some(ts("2024-01-01 09:45:00")));
}

#[test]
fn test_finish_with_nothing_running() {
    let store = memory_store();
    let err = TrackerLogic::finish(&store, None, ts("2024-01-01 09:00:00")).unwrap_err();
    assert!(matches!(err, AppError::NothingInProgress));

    let err = TrackerLogic::finish(&store, Some(3), ts("2024-01-01 09:00:00")).unwrap_err();
    assert!(matches!(err, AppError::NotFound(3)));
}

#[test]
fn test_running_reports_elapsed_and_break_reminder() {
    let store = memory_store();
    TrackerLogic::start(&store, "pomodoro", None, ts("2024-01-01 09:00:00")).unwrap();

    let at_26 = TrackerLogic::running(&store, ts("2024-01-01 09:26:05"), 25).unwrap();
    assert_eq!(at_26.len(), 1);
    assert_eq!(at_26[0].elapsed, "00:26:05");
    assert!(at_26[0].reminder_due);

    let at_10 = TrackerLogic::running(&store, ts("2024-01-01 09:10:00"), 25).unwrap();
    assert!(!at_10[0].reminder_due);
}

#[test]
fn test_reminder_window_bounds() {
    assert!(!reminder_due(25 * 60 - 1, 25));
    assert!(reminder_due(25 * 60, 25));
    assert!(reminder_due(30 * 60 - 1, 25));
    assert!(!reminder_due(30 * 60, 25));
    assert!(!reminder_due(25 * 60, 0));
}

#[test]
fn test_batch_delete_continues_past_missing_ids() {
    let store = memory_store();
    let a = TrackerLogic::start(&store, "a", None, ts("2024-01-01 09:00:00")).unwrap();
    let b = TrackerLogic::start(&store, "b", None, ts("2024-01-01 10:00:00")).unwrap();

    let report = DeleteLogic::apply(&store, &[a, 999, b, a]).unwrap();

    assert_eq!(report.deleted, vec![a, b]);
    assert_eq!(report.missing, vec![999, a]);
    assert!(store.open_events().unwrap().is_empty());
}

#[test]
fn test_intents_write_the_audit_log() {
    let store = memory_store();
    let id = TrackerLogic::start(&store, "logged", None, ts("2024-01-01 09:00:00")).unwrap();
    TrackerLogic::finish(&store, Some(id), ts("2024-01-01 09:05:00")).unwrap();
    DeleteLogic::apply(&store, &[id]).unwrap();

    let ops: Vec<String> = load_log(store.conn())
        .unwrap()
        .into_iter()
        .filter(|e| e.operation != "migration_applied")
        .map(|e| e.operation)
        .collect();
    assert_eq!(ops, vec!["start", "finish", "del"]);
}

#[test]
fn test_audit_and_migration_rows_share_the_timestamp_format() {
    let store = memory_store();
    TrackerLogic::start(&store, "logged", None, ts("2024-01-01 09:00:00")).unwrap();

    let entries = load_log(store.conn()).unwrap();
    assert!(entries.iter().any(|e| e.operation == "migration_applied"));
    for entry in &entries {
        assert!(
            parse_timestamp(&entry.date).is_ok(),
            "log row #{} has date '{}'",
            entry.id,
            entry.date
        );
    }
}

#[test]
fn test_config_defaults_when_file_missing_and_roundtrip() {
    let env = TestEnv::new();
    let path = env.home.path().join("conf").join("rtimetracker.conf");

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.break_reminder_minutes, 25);

    let custom = Config {
        database: env.db_path.clone(),
        break_reminder_minutes: 50,
    };
    custom.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), custom);
}

#[test]
fn test_config_missing_optional_field_and_malformed_file() {
    let env = TestEnv::new();
    let path = env.home.path().join("rtimetracker.conf");

    std::fs::write(&path, "database: /tmp/x.sqlite\n").unwrap();
    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.database, "/tmp/x.sqlite");
    assert_eq!(cfg.break_reminder_minutes, 25);

    std::fs::write(&path, "database: [unclosed\n").unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(AppError::ConfigParse(_))
    ));
}
