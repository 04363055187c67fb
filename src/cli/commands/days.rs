use crate::cli::commands::{commit, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::days::{default_days, resize_days, resolve_day};
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, success};
use crate::utils::date::{parse_date, today, weekday_name};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Days {
        count,
        set,
        reset,
        start,
    } = cmd
    {
        let (mut pool, mut session) = open_session(cfg)?;
        let mut changes = Vec::new();

        if *reset {
            let first = match start {
                Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => today(),
            };
            let n = count.unwrap_or(session.days.len());
            session.replace_days(resize_days(&default_days(first, n), n)?);
            changes.push(format!("reset {n} days from {first}"));
        } else if let Some(n) = count {
            session.resize_days(*n)?;
            changes.push(format!("count set to {n}"));
        }

        if let Some(args) = set
            && let [day, date] = args.as_slice()
        {
            let idx = day_position(&session, day)?;
            session.set_day_date(idx, date)?;
            changes.push(format!("Day {} → {}", idx + 1, display_or_empty(date)));
        }

        if !changes.is_empty() {
            let message = changes.join("; ");
            commit(&mut pool, &session, "days", "dateSpecs", &message)?;
            success(format!("Days updated: {message}"));
        }

        print_days(&session, &cfg.separator_char);
    }

    Ok(())
}

/// Zero-based position of a day given as number, label or date.
fn day_position(session: &Session, input: &str) -> AppResult<usize> {
    let spec = resolve_day(&session.days, input)?;
    session
        .days
        .iter()
        .position(|d| d.id == spec.id)
        .ok_or_else(|| AppError::InvalidDayIndex(input.to_string()))
}

fn display_or_empty(date: &str) -> &str {
    if date.trim().is_empty() { "(none)" } else { date }
}

fn print_days(session: &Session, separator_char: &str) {
    header("Planned days");

    let mut table = Table::with_headers(&["#", "Label", "Date", "Weekday", ""]);
    for (i, d) in session.days.iter().enumerate() {
        let marker = if !d.date.is_empty() && d.date == session.current_day {
            "◀ selected"
        } else {
            ""
        };
        table.add_row(vec![
            (i + 1).to_string(),
            d.label.clone(),
            if d.date.is_empty() {
                "(no date)".to_string()
            } else {
                d.date.clone()
            },
            weekday_name(&d.date),
            marker.to_string(),
        ]);
    }
    print!("{}", table.render(separator_char));
}
