//! Application session: records, planned days, history and the selected day.
//!
//! Mutations go through pure transitions; `save` is the only place that
//! touches the database.

use crate::core::days::{default_days, resize_days, set_day_date};
use crate::core::history::HistoryLedger;
use crate::core::store::{get_head, set_head_field, set_machine_notes, set_running};
use crate::db::kv::{
    ALL_KEYS, DATE_SPECS_KEY, HISTORY_KEY, HISTORY_SEQ_KEY, RECORDS_KEY, kv_delete, kv_get, kv_put,
};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day::{DaySpec, RunningFlag};
use crate::models::head::HeadField;
use crate::models::history::HistoryEntry;
use crate::models::record::RecordStore;
use crate::ui::messages::warning;
use crate::utils::date::today;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct Session {
    pub records: RecordStore,
    pub days: Vec<DaySpec>,
    pub history: HistoryLedger,
    pub current_day: String,
}

impl Session {
    pub fn from_parts(records: RecordStore, days: Vec<DaySpec>, history: HistoryLedger) -> Self {
        let current_day = first_date(&days);
        Self {
            records,
            days,
            history,
            current_day,
        }
    }

    /// Load saved state. Missing or unreadable values fall back to defaults.
    pub fn load(pool: &DbPool, n_days: usize) -> Self {
        let records = load_or_default(pool, RECORDS_KEY, RecordStore::new);
        let days = load_or_default(pool, DATE_SPECS_KEY, || default_days(today(), n_days));
        let last_issued = load_or_default(pool, HISTORY_SEQ_KEY, || 0u64);
        let history =
            load_or_default(pool, HISTORY_KEY, HistoryLedger::new).with_last_issued(last_issued);

        // An empty day list would leave nothing to select.
        let days = if days.is_empty() {
            default_days(today(), n_days)
        } else {
            days
        };

        Self::from_parts(records, days, history)
    }

    /// Persist all three blobs and the history id sequence in one transaction.
    pub fn save(&self, pool: &mut DbPool) -> AppResult<()> {
        let records = serde_json::to_string(&self.records)?;
        let days = serde_json::to_string(&self.days)?;
        let history = serde_json::to_string(&self.history)?;
        let last_issued = self.history.last_issued().to_string();

        let tx = pool.conn.transaction()?;
        kv_put(&tx, RECORDS_KEY, &records)?;
        kv_put(&tx, DATE_SPECS_KEY, &days)?;
        kv_put(&tx, HISTORY_KEY, &history)?;
        kv_put(&tx, HISTORY_SEQ_KEY, &last_issued)?;
        tx.commit()?;
        Ok(())
    }

    /// Drop every saved blob ("Reset All"). The history id sequence is kept.
    pub fn reset_all(pool: &mut DbPool) -> AppResult<()> {
        let tx = pool.conn.transaction()?;
        for key in ALL_KEYS {
            kv_delete(&tx, key)?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Replace the day plan; the selected day goes back to the first one.
    pub fn replace_days(&mut self, days: Vec<DaySpec>) {
        self.current_day = first_date(&days);
        self.days = days;
    }

    pub fn resize_days(&mut self, n: usize) -> AppResult<()> {
        let days = resize_days(&self.days, n)?;
        self.replace_days(days);
        Ok(())
    }

    pub fn set_day_date(&mut self, idx: usize, date: &str) -> AppResult<()> {
        let days = set_day_date(&self.days, idx, date)?;
        self.replace_days(days);
        Ok(())
    }

    /// Edit one head field and record the change in the history.
    /// Returns the history entry, or `None` when the head did not change.
    pub fn edit_head(
        &mut self,
        line: &str,
        date: &str,
        head_idx: usize,
        field: HeadField,
    ) -> AppResult<Option<HistoryEntry>> {
        let records = set_head_field(&self.records, line, date, head_idx, field)?;

        let before = get_head(&self.records, line, date, head_idx)?;
        let after = get_head(&records, line, date, head_idx)?;
        let (history, entry) = self.history.record_change(line, date, &before, &after);

        self.records = records;
        self.history = history;
        Ok(entry)
    }

    pub fn set_running(&mut self, line: &str, date: &str, flag: RunningFlag) {
        self.records = set_running(&self.records, line, date, flag);
    }

    pub fn set_machine_notes(&mut self, line: &str, date: &str, text: &str) {
        self.records = set_machine_notes(&self.records, line, date, text);
    }

    pub fn delete_history(&mut self, id: u64) -> bool {
        let next = self.history.delete(id);
        let removed = next.len() != self.history.len();
        self.history = next;
        removed
    }

    pub fn clear_history(&mut self) {
        self.history = self.history.clear();
    }
}

fn first_date(days: &[DaySpec]) -> String {
    days.first().map(|d| d.date.clone()).unwrap_or_default()
}

/// Read and decode one saved blob.
pub fn read_key<T: DeserializeOwned>(pool: &DbPool, key: &str) -> AppResult<Option<T>> {
    let raw = kv_get(&pool.conn, key).map_err(|e| AppError::PersistenceRead {
        key: key.to_string(),
        reason: e.to_string(),
    })?;

    match raw {
        None => Ok(None),
        Some(text) => serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| AppError::PersistenceRead {
                key: key.to_string(),
                reason: e.to_string(),
            }),
    }
}

fn load_or_default<T, F>(pool: &DbPool, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match read_key(pool, key) {
        Ok(Some(v)) => v,
        Ok(None) => default(),
        Err(e) => {
            warning(format!("{e}; using defaults."));
            default()
        }
    }
}
