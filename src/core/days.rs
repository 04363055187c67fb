//! Planned production days (the "Day 1".."Day N" sequence).

use crate::errors::{AppError, AppResult};
use crate::models::day::DaySpec;
use crate::utils::date::parse_date;
use chrono::{Days, NaiveDate};

pub const MIN_DAYS: usize = 1;
pub const MAX_DAYS: usize = 10;
pub const DEFAULT_DAYS: usize = 5;

/// `n` consecutive days starting at `start`, labelled Day 1..Day n.
pub fn default_days(start: NaiveDate, n: usize) -> Vec<DaySpec> {
    (0..n)
        .map(|i| {
            let date = start
                .checked_add_days(Days::new(i as u64))
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            DaySpec::new(i + 1, date)
        })
        .collect()
}

/// Keep the first `n` days or append undated ones, then relabel.
pub fn resize_days(days: &[DaySpec], n: usize) -> AppResult<Vec<DaySpec>> {
    if !(MIN_DAYS..=MAX_DAYS).contains(&n) {
        return Err(AppError::InvalidDayCount(n));
    }

    let mut out: Vec<DaySpec> = days.iter().take(n).cloned().collect();
    while out.len() < n {
        out.push(DaySpec::new(out.len() + 1, ""));
    }
    Ok(relabel(&out))
}

/// Ids and labels follow position: day{i} / Day {i}.
pub fn relabel(days: &[DaySpec]) -> Vec<DaySpec> {
    days.iter()
        .enumerate()
        .map(|(i, d)| DaySpec::new(i + 1, d.date.clone()))
        .collect()
}

/// Set the date of the day at zero-based `idx`. An empty `date` clears it.
pub fn set_day_date(days: &[DaySpec], idx: usize, date: &str) -> AppResult<Vec<DaySpec>> {
    if idx >= days.len() {
        return Err(AppError::InvalidDayIndex((idx + 1).to_string()));
    }

    let date = date.trim();
    let normalized = if date.is_empty() {
        String::new()
    } else {
        parse_date(date)
            .ok_or_else(|| AppError::InvalidDate(date.to_string()))?
            .format("%Y-%m-%d")
            .to_string()
    };

    let mut out = days.to_vec();
    out[idx].date = normalized;
    Ok(out)
}

/// Resolve user input to a planned day: a date ("2024-01-01"),
/// a label ("Day 2") or a position ("2").
pub fn resolve_day<'a>(days: &'a [DaySpec], input: &str) -> AppResult<&'a DaySpec> {
    let input = input.trim();

    if let Some(d) = days
        .iter()
        .find(|d| !d.date.is_empty() && d.date == input)
    {
        return Ok(d);
    }

    if let Some(d) = days.iter().find(|d| d.label.eq_ignore_ascii_case(input)) {
        return Ok(d);
    }

    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| days.get(i))
        .ok_or_else(|| AppError::InvalidDayIndex(input.to_string()))
}
