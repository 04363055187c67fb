//! Derived dashboard metrics. Pure reads over the record store.

use crate::core::registry::lines_by_section;
use crate::core::store::{get_day_entry, is_running as line_running};
use crate::models::day::DaySpec;
use crate::models::head::{HeadStatus, Issue};
use crate::models::line::{Line, Section};
use crate::models::record::RecordStore;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Percentage stored as hundredths (92.86% → 9286), rounded half-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Percent(u32);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const FULL: Percent = Percent(10_000);

    /// `part / whole` as a percentage; zero when `whole` is zero.
    pub fn ratio(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Percent::ZERO;
        }
        let (part, whole) = (part as u64, whole as u64);
        // round(part * 10000 / whole), halves away from zero
        Percent(((part * 20_000 + whole) / (2 * whole)) as u32)
    }

    pub fn from_hundredths(h: u32) -> Self {
        Percent(h)
    }

    pub fn hundredths(&self) -> u32 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Per-line metric selectable for averaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyMetric {
    Efficiency,
    FixedEfficiency,
}

impl EfficiencyMetric {
    pub fn compute(&self, store: &RecordStore, line: &str, date: &str) -> Percent {
        match self {
            EfficiencyMetric::Efficiency => efficiency(store, line, date),
            EfficiencyMetric::FixedEfficiency => fixed_efficiency(store, line, date),
        }
    }
}

pub fn is_running(store: &RecordStore, line: &str, date: &str) -> bool {
    line_running(store, line, date)
}

/// Share of heads that are active.
pub fn efficiency(store: &RecordStore, line: &str, date: &str) -> Percent {
    let heads = get_day_entry(store, line, date).heads;
    let active = heads
        .iter()
        .filter(|h| h.offline == HeadStatus::Active)
        .count();
    Percent::ratio(active, heads.len())
}

/// Share of heads that are active or were repaired.
pub fn fixed_efficiency(store: &RecordStore, line: &str, date: &str) -> Percent {
    let heads = get_day_entry(store, line, date).heads;
    let usable = heads
        .iter()
        .filter(|h| h.offline == HeadStatus::Active || h.is_fixed())
        .count();
    Percent::ratio(usable, heads.len())
}

/// (running lines, total lines)
pub fn aggregate_running(store: &RecordStore, lines: &[Line], date: &str) -> (usize, usize) {
    let running = lines
        .iter()
        .filter(|l| is_running(store, &l.name, date))
        .count();
    (running, lines.len())
}

/// Mean of `metric` over running lines only; zero when nothing runs.
pub fn average_efficiency(
    store: &RecordStore,
    lines: &[Line],
    date: &str,
    metric: EfficiencyMetric,
) -> Percent {
    let values: Vec<u32> = lines
        .iter()
        .filter(|l| is_running(store, &l.name, date))
        .map(|l| metric.compute(store, &l.name, date).hundredths())
        .collect();

    if values.is_empty() {
        return Percent::ZERO;
    }

    let sum: u64 = values.iter().map(|v| u64::from(*v)).sum();
    let n = values.len() as u64;
    Percent::from_hundredths(((2 * sum + n) / (2 * n)) as u32)
}

/// Offline and repaired head counts for one planned day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayDowntime {
    pub day: String,
    pub date: String,
    pub down: usize,
    pub fixed: usize,
}

pub fn down_and_fixed_by_day(
    store: &RecordStore,
    lines: &[Line],
    days: &[DaySpec],
) -> Vec<DayDowntime> {
    days.iter()
        .map(|d| {
            let (down, fixed) = lines.iter().fold((0, 0), |(down, fixed), line| {
                let heads = get_day_entry(store, &line.name, &d.date).heads;
                (
                    down + heads.iter().filter(|h| h.is_offline()).count(),
                    fixed + heads.iter().filter(|h| h.is_fixed()).count(),
                )
            });
            DayDowntime {
                day: d.label.clone(),
                date: d.date.clone(),
                down,
                fixed,
            }
        })
        .collect()
}

/// Heads per reported issue across `lines` on `date`.
pub fn issue_distribution(
    store: &RecordStore,
    lines: &[Line],
    date: &str,
) -> BTreeMap<Issue, usize> {
    let mut counts = BTreeMap::new();
    for line in lines {
        for h in get_day_entry(store, &line.name, date).heads {
            if h.issue != Issue::None {
                *counts.entry(h.issue).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Running count for one section, as shown in the dashboard headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionStatus {
    pub section: Section,
    pub running: usize,
    pub total: usize,
}

pub fn section_running(store: &RecordStore, date: &str) -> Vec<SectionStatus> {
    lines_by_section()
        .into_iter()
        .map(|(section, lines)| SectionStatus {
            section,
            running: lines
                .iter()
                .filter(|l| is_running(store, &l.name, date))
                .count(),
            total: lines.len(),
        })
        .collect()
}
