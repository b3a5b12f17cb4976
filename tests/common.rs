#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rtimetracker::db::EventStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway HOME plus a database path inside it.
pub struct TestEnv {
    pub home: TempDir,
    pub db_path: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("create temp dir");
        let mut path: PathBuf = home.path().to_path_buf();
        path.push("rtimetracker_test.sqlite");
        Self {
            db_path: path.to_string_lossy().to_string(),
            home,
        }
    }

    /// Binary invocation isolated from the real user config.
    pub fn rtt(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rtimetracker");
        cmd.env("HOME", self.home.path())
            .env("APPDATA", self.home.path())
            .env_remove("RUST_LOG")
            .args(["--db", &self.db_path]);
        cmd
    }

    pub fn init(&self) {
        self.rtt().args(["--test", "init"]).assert().success();
    }

    pub fn open_store(&self) -> EventStore {
        EventStore::open(&self.db_path).expect("open store")
    }
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid timestamp")
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn memory_store() -> EventStore {
    EventStore::open_in_memory().expect("in-memory store")
}
