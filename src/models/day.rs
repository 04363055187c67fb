use super::head::{HeadRecord, default_heads};
use serde::{Deserialize, Serialize};

/// One planned production day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySpec {
    pub id: String,    // "day{n}"
    pub date: String,  // "YYYY-MM-DD", empty until set
    pub label: String, // "Day {n}"
}

impl DaySpec {
    pub fn new(position: usize, date: impl Into<String>) -> Self {
        Self {
            id: format!("day{position}"),
            date: date.into(),
            label: format!("Day {position}"),
        }
    }

    pub fn display(&self) -> String {
        if self.date.is_empty() {
            format!("{} (no date)", self.label)
        } else {
            format!("{} ({})", self.label, self.date)
        }
    }
}

/// Head states and free-text notes for one line on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    #[serde(default)]
    pub heads: Vec<HeadRecord>,
    #[serde(default, rename = "machineNotes")]
    pub machine_notes: String,
}

impl Default for DayEntry {
    fn default() -> Self {
        default_day_entry()
    }
}

/// Entry used for every line/day nobody touched yet.
pub fn default_day_entry() -> DayEntry {
    DayEntry {
        heads: default_heads(),
        machine_notes: String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunningFlag {
    Yes,
    No,
}

impl RunningFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunningFlag::Yes => "Yes",
            RunningFlag::No => "No",
        }
    }

    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "on" | "true" | "1" => Some(RunningFlag::Yes),
            "no" | "n" | "off" | "false" | "0" => Some(RunningFlag::No),
            _ => None,
        }
    }
}
