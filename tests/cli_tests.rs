use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{dtl, init_with_days, setup_test_db, temp_out};

fn set_offline(db: &str, line: &str, head: &str, issue: &str, repaired: &str) {
    dtl()
        .args([
            "--db", db, "set", line, "--head", head, "--day", "1", "--offline", "offline",
            "--issue", issue, "--repaired", repaired,
        ])
        .assert()
        .success();
}

#[test]
fn init_creates_database() {
    let db = setup_test_db("cli_init");

    dtl()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(fs::metadata(&db).is_ok());
}

#[test]
fn days_reset_plans_consecutive_dates() {
    let db = setup_test_db("cli_days");
    init_with_days(&db);

    dtl()
        .args(["--db", &db, "days"])
        .assert()
        .success()
        .stdout(contains("2024-01-01"))
        .stdout(contains("2024-01-03"))
        .stdout(contains("Day 3"))
        .stdout(contains("Day 4").not());
}

#[test]
fn days_set_and_count_validation() {
    let db = setup_test_db("cli_days_set");
    init_with_days(&db);

    dtl()
        .args(["--db", &db, "days", "--set", "2", "2024-02-15"])
        .assert()
        .success()
        .stdout(contains("2024-02-15"));

    dtl()
        .args(["--db", &db, "days", "--count", "11"])
        .assert()
        .failure()
        .stderr(contains("Invalid number of days"));

    dtl()
        .args(["--db", &db, "days", "--set", "1", "15/02/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn set_head_offline_updates_efficiency_and_history() {
    let db = setup_test_db("cli_set");
    init_with_days(&db);

    dtl()
        .args([
            "--db", &db, "set", "Line 5", "--head", "3", "--day", "1", "--offline", "offline",
            "--issue", "chute", "--repaired", "not fixed",
        ])
        .assert()
        .success()
        .stdout(contains("Offline: Active → Offline"))
        .stdout(contains("Issue: None → Chute"))
        .stdout(contains("92.86"));

    dtl()
        .args(["--db", &db, "show", "5", "--day", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("Chute"))
        .stdout(contains("Not Fixed"))
        .stdout(contains("Line 4"))
        .stdout(contains("Line 6"));

    dtl()
        .args(["--db", &db, "history", "--line", "5"])
        .assert()
        .success()
        .stdout(contains("Repaired: N/A → Not Fixed"))
        .stdout(contains("3 entries"));
}

#[test]
fn fixed_head_counts_for_fixed_efficiency() {
    let db = setup_test_db("cli_fixed");
    init_with_days(&db);
    set_offline(&db, "5", "3", "chute", "fixed");

    dtl()
        .args(["--db", &db, "show", "5", "--day", "1"])
        .assert()
        .success()
        .stdout(contains("92.86"))
        .stdout(contains("100.00"));
}

#[test]
fn set_rejects_bad_head_and_values() {
    let db = setup_test_db("cli_set_bad");
    init_with_days(&db);

    dtl()
        .args(["--db", &db, "set", "5", "--head", "15", "--offline", "offline"])
        .assert()
        .failure()
        .stderr(contains("Invalid value for head: 15"));

    dtl()
        .args(["--db", &db, "set", "5", "--head", "0", "--offline", "offline"])
        .assert()
        .failure()
        .stderr(contains("Invalid value for head: 0"));

    dtl()
        .args(["--db", &db, "set", "5", "--head", "1", "--issue", "gremlins"])
        .assert()
        .failure()
        .stderr(contains("Invalid value for issue"));

    dtl()
        .args(["--db", &db, "set", "Line 40", "--head", "1", "--offline", "offline"])
        .assert()
        .failure()
        .stderr(contains("Invalid line number"));
}

#[test]
fn issue_on_active_head_is_skipped() {
    let db = setup_test_db("cli_locked");
    init_with_days(&db);

    dtl()
        .args(["--db", &db, "set", "7", "--head", "2", "--day", "1", "--issue", "operator"])
        .assert()
        .success()
        .stderr(contains("can only be set while the head is Offline"))
        .stdout(contains("unchanged"));

    dtl()
        .args(["--db", &db, "history"])
        .assert()
        .success()
        .stdout(contains("No history entries"));
}

#[test]
fn running_lines_feed_the_dashboard() {
    let db = setup_test_db("cli_dashboard");
    init_with_days(&db);

    dtl()
        .args(["--db", &db, "running", "5", "yes", "--day", "1"])
        .assert()
        .success()
        .stdout(contains("running = Yes"));
    set_offline(&db, "5", "3", "chute", "not fixed");

    dtl()
        .args(["--db", &db, "dashboard", "--day", "1", "--expand"])
        .assert()
        .success()
        .stdout(contains("1/39"))
        .stdout(contains("92.86"))
        .stdout(contains("Pellet Line"))
        .stdout(contains("Chute"));

    dtl()
        .args(["--db", &db, "running", "5", "maybe"])
        .assert()
        .failure()
        .stderr(contains("Invalid value for running"));
}

#[test]
fn machine_notes_are_shown() {
    let db = setup_test_db("cli_notes");
    init_with_days(&db);

    dtl()
        .args(["--db", &db, "notes", "12", "belt replaced", "--day", "2"])
        .assert()
        .success();

    dtl()
        .args(["--db", &db, "show", "12", "--day", "2"])
        .assert()
        .success()
        .stdout(contains("belt replaced"));
}

#[test]
fn summary_filters_export_and_import() {
    let db = setup_test_db("cli_summary");
    init_with_days(&db);
    set_offline(&db, "2", "4", "chute", "fixed");
    set_offline(&db, "20", "9", "operator", "not fixed");

    dtl()
        .args(["--db", &db, "summary", "--issue", "Chute"])
        .assert()
        .success()
        .stdout(contains("Line 2"))
        .stdout(contains("Line 20").not());

    dtl()
        .args(["--db", &db, "summary", "--options"])
        .assert()
        .success()
        .stdout(contains("Head 9: Operator (Not Fixed)"));

    let out = temp_out("cli_summary", "json");
    dtl()
        .args(["--db", &db, "summary", "--export", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let json = fs::read_to_string(&out).unwrap();
    assert!(json.contains("\"offlineHeads\""));
    assert!(json.contains("Line 20"));

    dtl()
        .args(["--db", &db, "summary", "--import", &out, "--issue", "Chute"])
        .assert()
        .success()
        .stdout(contains("Imported 2 rows"))
        .stdout(contains("Line 20"))
        .stderr(contains("Filters are not applied"));
}

#[test]
fn summary_all_covers_every_day() {
    let db = setup_test_db("cli_summary_all");
    init_with_days(&db);
    set_offline(&db, "7", "2", "chute", "fixed");
    dtl()
        .args([
            "--db", &db, "set", "5", "--head", "3", "--day", "2", "--offline", "offline",
        ])
        .assert()
        .success();

    dtl()
        .args(["--db", &db, "summary", "--all"])
        .assert()
        .success()
        .stdout(contains("Line 7"))
        .stdout(contains("Line 5"))
        .stdout(contains("2 row(s)"));

    dtl()
        .args(["--db", &db, "summary", "--day", "2"])
        .assert()
        .success()
        .stdout(contains("Line 5"))
        .stdout(contains("Line 7").not());

    dtl()
        .args(["--db", &db, "summary", "--all", "--day", "2"])
        .assert()
        .failure();
}

#[test]
fn binary_summary_import_fails() {
    let db = setup_test_db("cli_binary_import");
    init_with_days(&db);

    let bad = temp_out("cli_binary_import", "json");
    fs::write(&bad, [0xff, 0xfe, 0x00]).unwrap();

    dtl()
        .args(["--db", &db, "summary", "--import", &bad])
        .assert()
        .failure()
        .stderr(contains("Invalid JSON file"));
}

#[test]
fn malformed_summary_import_fails() {
    let db = setup_test_db("cli_bad_import");
    init_with_days(&db);

    let bad = temp_out("cli_bad_import", "json");
    fs::write(&bad, "[{ broken").unwrap();

    dtl()
        .args(["--db", &db, "summary", "--import", &bad])
        .assert()
        .failure()
        .stderr(contains("Invalid JSON file"));
}

#[test]
fn history_export_delete_and_clear() {
    let db = setup_test_db("cli_history");
    init_with_days(&db);
    set_offline(&db, "3", "1", "load cell", "not fixed");

    let out = temp_out("cli_history", "csv");
    dtl()
        .args(["--db", &db, "history", "--export", &out])
        .assert()
        .success();

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Timestamp,Line,Date,Head,Offline,Issue,Repaired,Notes,Change"));
    assert!(csv.contains("Line 3,2024-01-01,1,Offline,Load Cell,Not Fixed,N/A"));

    dtl()
        .args(["--db", &db, "history", "--delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("History entry #1 deleted"));

    dtl()
        .args(["--db", &db, "history", "--delete", "1", "--yes"])
        .assert()
        .success()
        .stderr(contains("No history entry with id 1"));

    dtl()
        .args(["--db", &db, "history", "--clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("History cleared (2 entries)"));
}

#[test]
fn reset_clears_everything() {
    let db = setup_test_db("cli_reset");
    init_with_days(&db);
    set_offline(&db, "9", "2", "hopper issues", "fixed");

    dtl()
        .args(["--db", &db, "reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("All data cleared"));

    dtl()
        .args(["--db", &db, "history"])
        .assert()
        .success()
        .stdout(contains("No history entries"));

    dtl()
        .args(["--db", &db, "summary"])
        .assert()
        .success()
        .stdout(contains("No offline heads"));
}

#[test]
fn internal_log_records_operations() {
    let db = setup_test_db("cli_log");
    init_with_days(&db);
    set_offline(&db, "1", "1", "chute", "fixed");

    dtl()
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("days"))
        .stdout(contains("set"));
}

#[test]
fn backup_and_db_info() {
    let db = setup_test_db("cli_backup");
    init_with_days(&db);

    let out = temp_out("cli_backup", "sqlite");
    dtl()
        .args(["--db", &db, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(fs::metadata(&out).is_ok());

    dtl()
        .args(["--db", &db, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("dateSpecs"))
        .stdout(contains("Integrity check passed"));
}
