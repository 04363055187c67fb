use serde::{Deserialize, Serialize};
use std::fmt;

/// Production floor section a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "PC Line")]
    PcLine,
    #[serde(rename = "Pellet Line")]
    PelletLine,
    #[serde(rename = "Extruded")]
    Extruded,
    #[serde(rename = "Hand Kettle")]
    HandKettle,
    #[serde(rename = "Twin Screw")]
    TwinScrew,
    #[serde(rename = "Sheeted 1")]
    Sheeted1,
    #[serde(rename = "Sheeted 2")]
    Sheeted2,
}

impl Section {
    /// Sections in floor order (same order as the line numbers).
    pub const ALL: [Section; 7] = [
        Section::PcLine,
        Section::PelletLine,
        Section::Extruded,
        Section::HandKettle,
        Section::TwinScrew,
        Section::Sheeted1,
        Section::Sheeted2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::PcLine => "PC Line",
            Section::PelletLine => "Pellet Line",
            Section::Extruded => "Extruded",
            Section::HandKettle => "Hand Kettle",
            Section::TwinScrew => "Twin Screw",
            Section::Sheeted1 => "Sheeted 1",
            Section::Sheeted2 => "Sheeted 2",
        }
    }

    /// Inclusive range of line numbers covered by the section.
    pub fn line_range(&self) -> (u8, u8) {
        match self {
            Section::PcLine => (1, 7),
            Section::PelletLine => (8, 10),
            Section::Extruded => (11, 16),
            Section::HandKettle => (17, 23),
            Section::TwinScrew => (24, 31),
            Section::Sheeted1 => (32, 37),
            Section::Sheeted2 => (38, 39),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A production line on the floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub number: u8,
    pub name: String, // "Line {number}"
    pub section: Section,
}

impl Line {
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.section)
    }
}
