#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use dtlogger::core::history::HistoryLedger;
use dtlogger::core::session::Session;
use dtlogger::models::day::DaySpec;
use dtlogger::models::record::RecordStore;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dtl() -> Command {
    cargo_bin_cmd!("dtlogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dtlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a test DB and plan three days starting 2024-01-01
pub fn init_with_days(db_path: &str) {
    dtl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    dtl()
        .args([
            "--db",
            db_path,
            "days",
            "--reset",
            "--start",
            "2024-01-01",
            "--count",
            "3",
        ])
        .assert()
        .success();
}

/// Session with the given dated days and nothing recorded
pub fn session_with_dates(dates: &[&str]) -> Session {
    let days = dates
        .iter()
        .enumerate()
        .map(|(i, d)| DaySpec::new(i + 1, *d))
        .collect();
    Session::from_parts(RecordStore::new(), days, HistoryLedger::new())
}
