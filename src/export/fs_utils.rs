// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use std::io;
use std::path::Path;

/// Refuse to clobber an existing export/backup target unless `force` is set
/// or the user confirms.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    if confirm(&format!("The file '{}' already exists. Overwrite?", path.display())) {
        info("Existing file will be overwritten.");
        return Ok(());
    }

    Err(AppError::from(io::Error::other(format!(
        "{} not overwritten",
        path.display()
    ))))
}
