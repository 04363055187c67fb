//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Failed to read saved state '{key}': {reason}")]
    PersistenceRead { key: String, reason: String },

    // ---------------------------
    // Registry / record errors
    // ---------------------------
    #[error("Invalid line number: {0} (expected 1..=39)")]
    InvalidLineNumber(u8),

    #[error("Unknown line: {0}")]
    InvalidLine(String),

    #[error("Invalid head index: {0} (expected 0..=13)")]
    InvalidHeadIndex(usize),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    // ---------------------------
    // Day plan errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid day: {0}")]
    InvalidDayIndex(String),

    #[error("Invalid number of days: {0} (expected 1..=10)")]
    InvalidDayCount(usize),

    // ---------------------------
    // Import / export errors
    // ---------------------------
    #[error("Invalid JSON file: {0}")]
    ImportParse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Backup error: {0}")]
    Backup(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
