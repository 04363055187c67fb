// src/export/history_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::history::HistoryEntry;
use crate::ui::messages::info;
use std::io;
use std::path::Path;

pub const CSV_HEADERS: [&str; 9] = [
    "Timestamp",
    "Line",
    "Date",
    "Head",
    "Offline",
    "Issue",
    "Repaired",
    "Notes",
    "Change",
];

fn to_record(e: &HistoryEntry) -> [String; 9] {
    [
        e.local_timestamp(),
        e.line.clone(),
        e.date.clone(),
        e.head.to_string(),
        e.offline.to_string(),
        e.issue.to_string(),
        e.repaired.to_string(),
        e.notes_or_na().to_string(),
        e.change.clone(),
    ]
}

fn write_records<W: io::Write>(wtr: &mut csv::Writer<W>, entries: &[&HistoryEntry]) -> AppResult<()> {
    wtr.write_record(CSV_HEADERS)?;
    for e in entries {
        wtr.write_record(to_record(e))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render history entries as CSV text, header included.
pub fn history_to_csv(entries: &[&HistoryEntry]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_records(&mut wtr, entries)?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV buffer error: {e}"))))?;
    String::from_utf8(bytes).map_err(|e| AppError::Other(format!("CSV encoding error: {e}")))
}

/// Export history entries to a CSV file.
pub fn export_history_csv(entries: &[&HistoryEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting history to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    write_records(&mut wtr, entries)?;

    notify_export_success("CSV", path);
    Ok(())
}
