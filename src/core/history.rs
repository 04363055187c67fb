//! Append-only audit ledger of head changes.

use crate::core::summary::Filter;
use crate::models::head::HeadRecord;
use crate::models::history::HistoryEntry;
use serde::{Deserialize, Serialize};

/// Persisted as the bare entry list. The id sequence is stored on its own
/// (see `with_last_issued`) so ids are never handed out twice, even after
/// the newest entries were deleted or the ledger was cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
    #[serde(skip)]
    last_issued: u64,
}

impl PartialEq for HistoryLedger {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.last_issued() == other.last_issued()
    }
}

impl Eq for HistoryLedger {}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the highest id ever issued.
    pub fn with_last_issued(mut self, last_issued: u64) -> Self {
        self.last_issued = last_issued;
        self
    }

    /// Highest id issued so far, including deleted entries.
    pub fn last_issued(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| e.id)
            .fold(self.last_issued, u64::max)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.last_issued() + 1
    }

    pub fn append(&self, entry: HistoryEntry) -> Self {
        let last_issued = self.last_issued().max(entry.id);
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self {
            entries,
            last_issued,
        }
    }

    /// Record the change from `before` to `after`; unchanged heads add nothing.
    pub fn record_change(
        &self,
        line: &str,
        date: &str,
        before: &HeadRecord,
        after: &HeadRecord,
    ) -> (Self, Option<HistoryEntry>) {
        match after.describe_change(before) {
            Some(change) => {
                let entry = HistoryEntry::snapshot(self.next_id(), line, date, after, change);
                (self.append(entry.clone()), Some(entry))
            }
            None => (self.clone(), None),
        }
    }

    /// Remove the entry with `id`; unknown ids leave the ledger as is.
    pub fn delete(&self, id: u64) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|e| e.id != id)
                .cloned()
                .collect(),
            last_issued: self.last_issued(),
        }
    }

    /// Drop every entry; the id sequence keeps going.
    pub fn clear(&self) -> Self {
        Self::new().with_last_issued(self.last_issued())
    }

    /// Entries for an exact line name and head number.
    pub fn filter(&self, line: &Filter, head: &Filter) -> Vec<&HistoryEntry> {
        self.entries
            .iter()
            .filter(|e| line.matches_with(|l| e.line == l))
            .filter(|e| head.matches_with(|h| e.head.to_string() == h))
            .collect()
    }
}
