use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of heads on every line.
pub const HEADS_PER_LINE: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadStatus {
    Active,
    Offline,
}

impl HeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadStatus::Active => "Active",
            HeadStatus::Offline => "Offline",
        }
    }

    /// Helper: parse user input (case-insensitive)
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" | "a" => Some(HeadStatus::Active),
            "offline" | "o" | "down" => Some(HeadStatus::Offline),
            _ => None,
        }
    }
}

/// Reason a head went offline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Issue {
    None,
    Chute,
    Operator,
    #[serde(rename = "Load Cell")]
    LoadCell,
    #[serde(rename = "Detached Head")]
    DetachedHead,
    #[serde(rename = "Stepper Motor Error")]
    StepperMotorError,
    #[serde(rename = "Hopper Issues")]
    HopperIssues,
    #[serde(rename = "Installed Wrong")]
    InstalledWrong,
}

impl Issue {
    pub const ALL: [Issue; 8] = [
        Issue::None,
        Issue::Chute,
        Issue::Operator,
        Issue::LoadCell,
        Issue::DetachedHead,
        Issue::StepperMotorError,
        Issue::HopperIssues,
        Issue::InstalledWrong,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Issue::None => "None",
            Issue::Chute => "Chute",
            Issue::Operator => "Operator",
            Issue::LoadCell => "Load Cell",
            Issue::DetachedHead => "Detached Head",
            Issue::StepperMotorError => "Stepper Motor Error",
            Issue::HopperIssues => "Hopper Issues",
            Issue::InstalledWrong => "Installed Wrong",
        }
    }

    /// Accepts the display name in any case, with spaces, dashes or underscores
    /// ("load cell", "load-cell", "LOAD_CELL").
    pub fn from_input(s: &str) -> Option<Self> {
        let wanted = normalize_input(s);
        Issue::ALL
            .into_iter()
            .find(|i| normalize_input(i.as_str()) == wanted)
    }
}

/// Repair state of an offline head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Repaired {
    #[serde(rename = "N/A")]
    NotApplicable,
    Fixed,
    #[serde(rename = "Not Fixed")]
    NotFixed,
}

impl Repaired {
    pub fn as_str(&self) -> &'static str {
        match self {
            Repaired::NotApplicable => "N/A",
            Repaired::Fixed => "Fixed",
            Repaired::NotFixed => "Not Fixed",
        }
    }

    pub fn from_input(s: &str) -> Option<Self> {
        match normalize_input(s).as_str() {
            "n/a" | "na" => Some(Repaired::NotApplicable),
            "fixed" | "yes" => Some(Repaired::Fixed),
            "not fixed" | "notfixed" | "no" => Some(Repaired::NotFixed),
            _ => None,
        }
    }
}

fn normalize_input(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', '_'], " ")
}

macro_rules! display_as_str {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(HeadStatus, Issue, Repaired);

/// One editable field of a head, carrying its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadField {
    Offline(HeadStatus),
    Issue(Issue),
    Repaired(Repaired),
    Notes(String),
}

impl HeadField {
    pub fn name(&self) -> &'static str {
        match self {
            HeadField::Offline(_) => "Offline",
            HeadField::Issue(_) => "Issue",
            HeadField::Repaired(_) => "Repaired",
            HeadField::Notes(_) => "Notes",
        }
    }
}

/// Status of one head for a line/day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadRecord {
    pub head: u8,
    pub offline: HeadStatus,
    pub issue: Issue,
    pub repaired: Repaired,
    #[serde(default)]
    pub notes: String,
}

impl HeadRecord {
    /// A running head with nothing to report.
    pub fn active(head: u8) -> Self {
        Self {
            head,
            offline: HeadStatus::Active,
            issue: Issue::None,
            repaired: Repaired::NotApplicable,
            notes: String::new(),
        }
    }

    pub fn is_offline(&self) -> bool {
        self.offline == HeadStatus::Offline
    }

    pub fn is_fixed(&self) -> bool {
        self.is_offline() && self.repaired == Repaired::Fixed
    }

    /// Whether `field` can currently be edited on this head.
    ///
    /// `Offline` is always editable; `Issue` and `Notes` need an offline head;
    /// `Repaired` also needs an issue.
    pub fn accepts(&self, field: &HeadField) -> bool {
        match field {
            HeadField::Offline(_) => true,
            HeadField::Issue(_) | HeadField::Notes(_) => self.is_offline(),
            HeadField::Repaired(_) => self.is_offline() && self.issue != Issue::None,
        }
    }

    /// Apply one field change and restore the record invariants.
    pub fn with_field(&self, field: HeadField) -> Self {
        let mut next = self.clone();
        match field {
            HeadField::Offline(v) => next.offline = v,
            HeadField::Issue(v) => next.issue = v,
            HeadField::Repaired(v) => next.repaired = v,
            HeadField::Notes(v) => next.notes = v,
        }
        next.normalized()
    }

    /// Active ⇒ no issue, no repair state, no notes; no issue ⇒ no repair state.
    pub fn normalized(mut self) -> Self {
        if self.offline == HeadStatus::Active {
            self.issue = Issue::None;
            self.repaired = Repaired::NotApplicable;
            self.notes.clear();
        }
        if self.issue == Issue::None {
            self.repaired = Repaired::NotApplicable;
        }
        self
    }

    /// Human-readable diff against a previous version of the same head,
    /// e.g. `Offline: Active → Offline; Issue: None → Chute`.
    pub fn describe_change(&self, before: &HeadRecord) -> Option<String> {
        let mut parts = Vec::new();

        if before.offline != self.offline {
            parts.push(format!("Offline: {} → {}", before.offline, self.offline));
        }
        if before.issue != self.issue {
            parts.push(format!("Issue: {} → {}", before.issue, self.issue));
        }
        if before.repaired != self.repaired {
            parts.push(format!("Repaired: {} → {}", before.repaired, self.repaired));
        }
        if before.notes != self.notes {
            let show = |s: &str| {
                if s.is_empty() {
                    "(empty)".to_string()
                } else {
                    format!("\"{s}\"")
                }
            };
            parts.push(format!(
                "Notes: {} → {}",
                show(&before.notes),
                show(&self.notes)
            ));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}

/// Fourteen active heads, numbered 1..=14.
pub fn default_heads() -> Vec<HeadRecord> {
    (1..=HEADS_PER_LINE as u8).map(HeadRecord::active).collect()
}
