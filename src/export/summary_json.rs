// src/export/summary_json.rs

use crate::core::summary::{SummaryScope, SummaryView, summary_to_json};
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::summary::SummaryRow;
use crate::ui::messages::info;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A directory gets the default file name for the scope appended.
pub fn resolve_summary_path(target: &str, scope: &SummaryScope) -> PathBuf {
    let path = Path::new(target);
    if path.is_dir() {
        path.join(scope.export_file_name())
    } else {
        path.to_path_buf()
    }
}

/// Export summary rows as pretty-printed JSON.
pub fn export_summary_json(rows: &[SummaryRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting summary to JSON: {}", path.display()));

    let json = summary_to_json(rows)?;
    fs::write(path, json)?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Load a summary file into `view`. The view is untouched when the file
/// cannot be read or parsed.
pub fn import_summary_json(view: &mut SummaryView, path: &Path) -> AppResult<usize> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => {
            AppError::ImportParse(format!("{}: not UTF-8 text", path.display()))
        }
        _ => AppError::Io(e),
    })?;
    view.import_json(&text)
}
