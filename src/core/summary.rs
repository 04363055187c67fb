//! Offline-head summary rows and their filters.

use crate::core::store::get_day_entry;
use crate::errors::{AppError, AppResult};
use crate::models::day::DaySpec;
use crate::models::line::Line;
use crate::models::record::RecordStore;
use crate::models::summary::SummaryRow;
use std::collections::BTreeSet;

pub const ALL_LINES: &str = "All Lines";
pub const ALL_ISSUES: &str = "All Issues";
pub const ALL_HEADS: &str = "All Heads";

/// Which planned days a summary covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryScope {
    SingleDay(String),
    AllDays,
}

impl SummaryScope {
    fn includes(&self, date: &str) -> bool {
        match self {
            SummaryScope::SingleDay(d) => d == date,
            SummaryScope::AllDays => true,
        }
    }

    /// `summary_{date}.json` or `summary_all.json`.
    pub fn export_file_name(&self) -> String {
        match self {
            SummaryScope::SingleDay(d) => format!("summary_{d}.json"),
            SummaryScope::AllDays => "summary_all.json".to_string(),
        }
    }
}

/// A filter value; `All` bypasses the predicate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(String),
}

impl Filter {
    /// `None` or the sentinel text ("All Lines", "All Heads", ...) mean no filter.
    pub fn parse(value: Option<&str>, sentinel: &str) -> Self {
        match value.map(str::trim) {
            None | Some("") => Filter::All,
            Some(v) if v.eq_ignore_ascii_case(sentinel) || v.eq_ignore_ascii_case("all") => {
                Filter::All
            }
            Some(v) => Filter::Only(v.to_string()),
        }
    }

    pub fn matches_with<F: Fn(&str) -> bool>(&self, pred: F) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(v) => pred(v),
        }
    }
}

/// One row per (line, day) in scope that has offline heads, line-major.
pub fn build_summary_rows(
    store: &RecordStore,
    lines: &[Line],
    days: &[DaySpec],
    scope: &SummaryScope,
) -> Vec<SummaryRow> {
    let mut rows = Vec::new();

    for line in lines {
        for day in days.iter().filter(|d| scope.includes(&d.date)) {
            let entry = get_day_entry(store, &line.name, &day.date);
            let mut offline: Vec<_> = entry.heads.iter().filter(|h| h.is_offline()).collect();
            if offline.is_empty() {
                continue;
            }
            offline.sort_by_key(|h| h.head);

            let issues = offline
                .iter()
                .map(|h| format!("Head {}: {} ({})", h.head, h.issue, h.repaired))
                .collect::<Vec<_>>()
                .join("; ");

            rows.push(SummaryRow {
                line: line.name.clone(),
                section: line.section,
                date: day.date.clone(),
                offline_heads: offline.iter().map(|h| h.head).collect(),
                issues,
            });
        }
    }

    rows
}

/// Keep rows matching line equality, issue substring and head membership.
pub fn filter_rows(
    rows: &[SummaryRow],
    line: &Filter,
    issue: &Filter,
    head: &Filter,
) -> Vec<SummaryRow> {
    rows.iter()
        .filter(|r| {
            line.matches_with(|l| r.line == l)
                && issue.matches_with(|i| r.issues.contains(i))
                && head.matches_with(|h| r.offline_heads.iter().any(|n| n.to_string() == h))
        })
        .cloned()
        .collect()
}

/// Distinct issue segments and offline heads present in `rows`
/// (the values offered as filter choices).
pub fn filter_options(rows: &[SummaryRow]) -> (Vec<String>, Vec<u8>) {
    let mut issues = Vec::new();
    let mut seen = BTreeSet::new();
    for segment in rows.iter().flat_map(|r| r.issues.split("; ")) {
        if !segment.is_empty() && seen.insert(segment) {
            issues.push(segment.to_string());
        }
    }

    let heads: BTreeSet<u8> = rows
        .iter()
        .flat_map(|r| r.offline_heads.iter().copied())
        .collect();

    (issues, heads.into_iter().collect())
}

/// Parse an exported summary file.
pub fn parse_summary_json(text: &str) -> AppResult<Vec<SummaryRow>> {
    serde_json::from_str(text).map_err(|e| AppError::ImportParse(e.to_string()))
}

pub fn summary_to_json(rows: &[SummaryRow]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Rows shown by the summary view.
///
/// Once a file has been imported its rows are shown verbatim and the
/// line/issue/head filters no longer apply, until the import is cleared.
#[derive(Debug, Clone, Default)]
pub struct SummaryView {
    imported: Option<Vec<SummaryRow>>,
}

impl SummaryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the imported rows; on a parse error nothing changes.
    pub fn import_json(&mut self, text: &str) -> AppResult<usize> {
        let rows = parse_summary_json(text)?;
        let n = rows.len();
        self.imported = Some(rows);
        Ok(n)
    }

    pub fn clear_import(&mut self) {
        self.imported = None;
    }

    pub fn has_import(&self) -> bool {
        self.imported.is_some()
    }

    pub fn display_rows(
        &self,
        base: &[SummaryRow],
        line: &Filter,
        issue: &Filter,
        head: &Filter,
    ) -> Vec<SummaryRow> {
        match &self.imported {
            Some(rows) => rows.clone(),
            None => filter_rows(base, line, issue, head),
        }
    }
}
