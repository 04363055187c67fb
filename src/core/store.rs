//! Record store transitions.
//!
//! Every write takes the current store by reference and returns a new one;
//! the caller decides when to swap it in and persist it.

use crate::errors::{AppError, AppResult};
use crate::models::day::{DayEntry, RunningFlag, default_day_entry};
use crate::models::head::{HEADS_PER_LINE, HeadField, HeadRecord};
use crate::models::record::{LineRecord, RecordStore};

/// Stored entry for `line`/`date`, or the default one. Never writes.
pub fn get_day_entry(store: &RecordStore, line: &str, date: &str) -> DayEntry {
    match store.line(line).and_then(|l| l.days.get(date)) {
        Some(entry) if !entry.heads.is_empty() => entry.clone(),
        Some(entry) => DayEntry {
            machine_notes: entry.machine_notes.clone(),
            ..default_day_entry()
        },
        None => default_day_entry(),
    }
}

/// Head at zero-based `head_idx`; heads missing from a short stored list read as active.
pub fn get_head(store: &RecordStore, line: &str, date: &str, head_idx: usize) -> AppResult<HeadRecord> {
    if head_idx >= HEADS_PER_LINE {
        return Err(AppError::InvalidHeadIndex(head_idx));
    }
    Ok(get_day_entry(store, line, date)
        .heads
        .get(head_idx)
        .cloned()
        .unwrap_or_else(|| HeadRecord::active(head_idx as u8 + 1)))
}

/// Whether the line was flagged running on `date`.
pub fn is_running(store: &RecordStore, line: &str, date: &str) -> bool {
    store
        .line(line)
        .and_then(|l| l.running.get(date))
        .is_some_and(|flag| *flag == RunningFlag::Yes)
}

/// Apply one head field change; `head_idx` is zero-based (head 1 → 0).
pub fn set_head_field(
    store: &RecordStore,
    line: &str,
    date: &str,
    head_idx: usize,
    field: HeadField,
) -> AppResult<RecordStore> {
    if head_idx >= HEADS_PER_LINE {
        return Err(AppError::InvalidHeadIndex(head_idx));
    }

    let mut entry = get_day_entry(store, line, date);
    // Stored lists shorter than 14 are topped up before indexing.
    if entry.heads.len() < HEADS_PER_LINE {
        let defaults = default_day_entry().heads;
        entry.heads.extend_from_slice(&defaults[entry.heads.len()..]);
    }

    entry.heads[head_idx] = entry.heads[head_idx].with_field(field);

    Ok(with_day_entry(store, line, date, entry))
}

pub fn set_machine_notes(store: &RecordStore, line: &str, date: &str, text: &str) -> RecordStore {
    let mut entry = get_day_entry(store, line, date);
    entry.machine_notes = text.to_string();
    with_day_entry(store, line, date, entry)
}

pub fn set_running(store: &RecordStore, line: &str, date: &str, flag: RunningFlag) -> RecordStore {
    let mut next = store.clone();
    next.lines
        .entry(line.to_string())
        .or_insert_with(LineRecord::default)
        .running
        .insert(date.to_string(), flag);
    next
}

fn with_day_entry(store: &RecordStore, line: &str, date: &str, entry: DayEntry) -> RecordStore {
    let mut next = store.clone();
    next.lines
        .entry(line.to_string())
        .or_insert_with(LineRecord::default)
        .days
        .insert(date.to_string(), entry);
    next
}
