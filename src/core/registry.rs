//! Static registry of the 39 production lines.

use crate::errors::{AppError, AppResult};
use crate::models::line::{Line, Section};
use std::sync::OnceLock;

pub const TOTAL_LINES: u8 = 39;

/// Section owning line `n`.
pub fn section_of(n: u8) -> AppResult<Section> {
    Section::ALL
        .into_iter()
        .find(|s| {
            let (lo, hi) = s.line_range();
            (lo..=hi).contains(&n)
        })
        .ok_or(AppError::InvalidLineNumber(n))
}

/// All lines ordered by number. Built on first use.
pub fn all_lines() -> &'static [Line] {
    static LINES: OnceLock<Vec<Line>> = OnceLock::new();

    LINES.get_or_init(|| {
        Section::ALL
            .into_iter()
            .flat_map(|section| {
                let (lo, hi) = section.line_range();
                (lo..=hi).map(move |number| Line {
                    number,
                    name: format!("Line {number}"),
                    section,
                })
            })
            .collect()
    })
}

/// Look up a line by name ("Line 5", case-insensitive) or bare number ("5").
pub fn find_line(input: &str) -> AppResult<&'static Line> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("Line")
        .or_else(|| trimmed.strip_prefix("line"))
        .or_else(|| trimmed.strip_prefix("LINE"))
        .unwrap_or(trimmed)
        .trim();

    let n: u8 = digits
        .parse()
        .map_err(|_| AppError::InvalidLine(input.to_string()))?;

    all_lines()
        .iter()
        .find(|l| l.number == n)
        .ok_or(AppError::InvalidLineNumber(n))
}

/// Lines grouped per section, sections in floor order.
pub fn lines_by_section() -> Vec<(Section, Vec<&'static Line>)> {
    Section::ALL
        .into_iter()
        .map(|section| {
            let lines = all_lines()
                .iter()
                .filter(|l| l.section == section)
                .collect();
            (section, lines)
        })
        .collect()
}

/// Previous / next line names with wrap-around (first ↔ last).
pub fn neighbours(line: &Line) -> (&'static str, &'static str) {
    let lines = all_lines();
    let idx = lines
        .iter()
        .position(|l| l.number == line.number)
        .unwrap_or(0);
    let prev = if idx == 0 { lines.len() - 1 } else { idx - 1 };
    let next = if idx + 1 == lines.len() { 0 } else { idx + 1 };
    (&lines[prev].name, &lines[next].name)
}
