mod common;

use common::session_with_dates;
use dtlogger::core::session::{Session, read_key};
use dtlogger::db::initialize::init_db;
use dtlogger::db::kv::{
    DATE_SPECS_KEY, HISTORY_KEY, HISTORY_SEQ_KEY, RECORDS_KEY, kv_get, kv_info, kv_put,
};
use dtlogger::db::log::{load_log, ttlog};
use dtlogger::db::pool::DbPool;
use dtlogger::errors::AppError;
use dtlogger::models::day::RunningFlag;
use dtlogger::models::head::{HeadField, HeadStatus, Issue};
use dtlogger::models::record::RecordStore;

const D1: &str = "2024-01-01";

fn memory_db() -> DbPool {
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();
    pool
}

#[test]
fn migrations_are_idempotent() {
    let pool = memory_db();
    init_db(&pool.conn).unwrap();
    init_db(&pool.conn).unwrap();

    let applied = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|r| r.operation == "migration_applied")
        .count();
    assert_eq!(applied, 1);
}

#[test]
fn fresh_kv_store_carries_updated_at() {
    let pool = memory_db();
    let mut stmt = pool.conn.prepare("PRAGMA table_info('kv_store')").unwrap();
    let cols: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .unwrap()
        .map(|c| c.unwrap())
        .collect();
    assert_eq!(cols, vec!["key", "value", "updated_at"]);

    let targets: Vec<String> = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|r| r.operation == "migration_applied")
        .map(|r| r.target)
        .collect();
    assert_eq!(targets, vec!["20251019_0001_kv_store"]);
}

#[test]
fn empty_database_loads_defaults() {
    let pool = memory_db();
    let s = Session::load(&pool, 4);

    assert!(s.records.is_empty());
    assert!(s.history.is_empty());
    assert_eq!(s.days.len(), 4);
    assert_eq!(s.current_day, s.days[0].date);
}

#[test]
fn saved_session_round_trips() {
    let mut pool = memory_db();

    let mut s = session_with_dates(&[D1, "2024-01-02"]);
    s.edit_head("Line 5", D1, 2, HeadField::Offline(HeadStatus::Offline)).unwrap();
    s.edit_head("Line 5", D1, 2, HeadField::Issue(Issue::Chute)).unwrap();
    s.set_running("Line 5", D1, RunningFlag::Yes);
    s.set_machine_notes("Line 5", D1, "sensor cleaned");
    s.save(&mut pool).unwrap();

    let loaded = Session::load(&pool, 5);
    assert_eq!(loaded.records, s.records);
    assert_eq!(loaded.days, s.days);
    assert_eq!(loaded.history, s.history);
    assert_eq!(loaded.current_day, D1);

    let keys: Vec<String> = kv_info(&pool.conn).unwrap().into_iter().map(|k| k.0).collect();
    assert_eq!(keys, vec!["dateSpecs", "history", "historySeq", "records"]);
}

#[test]
fn history_id_sequence_survives_reload_and_reset() {
    let mut pool = memory_db();
    let mut s = session_with_dates(&[D1]);
    let first = s
        .edit_head("Line 1", D1, 0, HeadField::Offline(HeadStatus::Offline))
        .unwrap()
        .unwrap();
    s.delete_history(first.id);
    s.save(&mut pool).unwrap();

    let mut loaded = Session::load(&pool, 1);
    assert!(loaded.history.is_empty());
    assert_eq!(loaded.history.next_id(), first.id + 1);

    let second = loaded
        .edit_head("Line 1", D1, 1, HeadField::Offline(HeadStatus::Offline))
        .unwrap()
        .unwrap();
    assert_ne!(second.id, first.id);
    loaded.save(&mut pool).unwrap();

    Session::reset_all(&mut pool).unwrap();
    assert_eq!(kv_get(&pool.conn, HISTORY_SEQ_KEY).unwrap().as_deref(), Some("2"));
    assert_eq!(Session::load(&pool, 1).history.next_id(), 3);
}

#[test]
fn corrupt_blob_falls_back_to_default_for_that_key_only() {
    let mut pool = memory_db();
    let s = session_with_dates(&[D1]);
    s.save(&mut pool).unwrap();

    kv_put(&pool.conn, RECORDS_KEY, "{ this is not json").unwrap();

    let err = read_key::<RecordStore>(&pool, RECORDS_KEY).unwrap_err();
    assert!(matches!(err, AppError::PersistenceRead { .. }));

    let loaded = Session::load(&pool, 3);
    assert!(loaded.records.is_empty());
    assert_eq!(loaded.days, s.days);
}

#[test]
fn reset_all_drops_every_blob() {
    let mut pool = memory_db();
    let mut s = session_with_dates(&[D1]);
    s.edit_head("Line 1", D1, 0, HeadField::Offline(HeadStatus::Offline)).unwrap();
    s.save(&mut pool).unwrap();

    Session::reset_all(&mut pool).unwrap();

    for key in [RECORDS_KEY, DATE_SPECS_KEY, HISTORY_KEY] {
        assert!(kv_get(&pool.conn, key).unwrap().is_none());
    }
    let loaded = Session::load(&pool, 2);
    assert!(loaded.records.is_empty());
    assert!(loaded.history.is_empty());
    assert_eq!(loaded.days.len(), 2);
}

#[test]
fn kv_put_overwrites() {
    let pool = memory_db();
    kv_put(&pool.conn, "records", "{}").unwrap();
    kv_put(&pool.conn, "records", "{\"Line 1\":{}}").unwrap();
    assert_eq!(
        kv_get(&pool.conn, "records").unwrap().as_deref(),
        Some("{\"Line 1\":{}}")
    );
}

#[test]
fn internal_log_keeps_insert_order() {
    let pool = memory_db();
    ttlog(&pool.conn, "set", "Line 1", "first").unwrap();
    ttlog(&pool.conn, "notes", "Line 2", "second").unwrap();

    let rows: Vec<_> = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|r| r.operation != "migration_applied")
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].message, "first");
    assert_eq!(rows[1].target, "Line 2");
}
