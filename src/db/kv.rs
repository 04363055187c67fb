//! Key/value access to the saved state blobs.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub const RECORDS_KEY: &str = "records";
pub const DATE_SPECS_KEY: &str = "dateSpecs";
pub const HISTORY_KEY: &str = "history";
/// Highest history id ever issued. Outlives deletes, clears and resets.
pub const HISTORY_SEQ_KEY: &str = "historySeq";

pub const ALL_KEYS: [&str; 3] = [RECORDS_KEY, DATE_SPECS_KEY, HISTORY_KEY];

pub fn kv_get(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
    let value = stmt
        .query_row([key], |row| row.get::<_, String>(0))
        .optional()?;
    Ok(value)
}

pub fn kv_put(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, now],
    )?;
    Ok(())
}

pub fn kv_delete(conn: &Connection, key: &str) -> AppResult<()> {
    conn.execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
    Ok(())
}

/// (key, size in bytes, updated_at) for every stored blob.
pub fn kv_info(conn: &Connection) -> AppResult<Vec<(String, usize, String)>> {
    let mut stmt =
        conn.prepare("SELECT key, LENGTH(value), updated_at FROM kv_store ORDER BY key ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, i64>(1)? as usize,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
