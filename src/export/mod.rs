// src/export/mod.rs

mod fs_utils;
mod history_csv;
mod summary_json;

pub use fs_utils::ensure_writable;
pub use history_csv::{CSV_HEADERS, export_history_csv, history_to_csv};
pub use summary_json::{export_summary_json, import_summary_json, resolve_summary_path};

use crate::ui::messages::success;
use std::path::Path;

/// Common completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
