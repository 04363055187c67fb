use super::head::{HeadRecord, HeadStatus, Issue, Repaired};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// One audited head change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub line: String,
    pub date: String,
    pub head: u8,
    pub offline: HeadStatus,
    pub issue: Issue,
    pub repaired: Repaired,
    #[serde(default)]
    pub notes: String,
    pub change: String,
}

impl HistoryEntry {
    /// Snapshot of `after` for `line`/`date`, stamped now.
    pub fn snapshot(id: u64, line: &str, date: &str, after: &HeadRecord, change: String) -> Self {
        Self {
            id,
            timestamp: Utc::now(),
            line: line.to_string(),
            date: date.to_string(),
            head: after.head,
            offline: after.offline,
            issue: after.issue,
            repaired: after.repaired,
            notes: after.notes.clone(),
            change,
        }
    }

    /// Timestamp rendered in the local timezone.
    pub fn local_timestamp(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }

    pub fn notes_or_na(&self) -> &str {
        if self.notes.is_empty() {
            "N/A"
        } else {
            &self.notes
        }
    }
}
