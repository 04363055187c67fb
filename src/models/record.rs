//! Persisted shape of the downtime records:
//! `{ "Line 5": { "running": { "2024-01-01": "Yes" }, "2024-01-01": { heads, machineNotes } } }`

use super::day::{DayEntry, RunningFlag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything recorded for one line, keyed by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub running: BTreeMap<String, RunningFlag>,
    #[serde(flatten)]
    pub days: BTreeMap<String, DayEntry>,
}

/// Line name → line record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore {
    pub lines: BTreeMap<String, LineRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self, name: &str) -> Option<&LineRecord> {
        self.lines.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
