use crate::cli::commands::show::print_line_day;
use crate::cli::commands::{commit, open_session, selected_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::registry::find_line;
use crate::core::store::get_head;
use crate::errors::{AppError, AppResult};
use crate::models::head::{HEADS_PER_LINE, HeadField, HeadStatus, Issue, Repaired};
use crate::ui::messages::{info, success, warning};

/// Fields requested on the command line, in the order they are applied.
fn requested_fields(
    offline: &Option<String>,
    issue: &Option<String>,
    repaired: &Option<String>,
    notes: &Option<String>,
) -> AppResult<Vec<HeadField>> {
    let mut fields = Vec::new();

    if let Some(v) = offline {
        let status = HeadStatus::from_input(v).ok_or_else(|| AppError::InvalidValue {
            field: "offline",
            value: v.clone(),
        })?;
        fields.push(HeadField::Offline(status));
    }
    if let Some(v) = issue {
        let issue = Issue::from_input(v).ok_or_else(|| AppError::InvalidValue {
            field: "issue",
            value: v.clone(),
        })?;
        fields.push(HeadField::Issue(issue));
    }
    if let Some(v) = repaired {
        let repaired = Repaired::from_input(v).ok_or_else(|| AppError::InvalidValue {
            field: "repaired",
            value: v.clone(),
        })?;
        fields.push(HeadField::Repaired(repaired));
    }
    if let Some(v) = notes {
        fields.push(HeadField::Notes(v.clone()));
    }

    Ok(fields)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        line,
        head,
        day,
        offline,
        issue,
        repaired,
        notes,
    } = cmd
    {
        let fields = requested_fields(offline, issue, repaired, notes)?;
        if fields.is_empty() {
            warning("Nothing to change: use --offline, --issue, --repaired or --notes.");
            return Ok(());
        }

        let (mut pool, mut session) = open_session(cfg)?;
        let line = find_line(line)?;
        let day = selected_day(&session, day.as_deref())?;
        let head_idx = usize::from(*head)
            .checked_sub(1)
            .filter(|idx| *idx < HEADS_PER_LINE)
            .ok_or_else(|| AppError::InvalidValue {
                field: "head",
                value: head.to_string(),
            })?;

        let mut changes = Vec::new();
        for field in fields {
            let current = get_head(&session.records, &line.name, &day.date, head_idx)?;
            if !current.accepts(&field) {
                let needs = match field {
                    HeadField::Repaired(_) => "Offline with an issue",
                    _ => "Offline",
                };
                warning(format!(
                    "{} of head {head} can only be set while the head is {needs}; skipped.",
                    field.name()
                ));
                continue;
            }

            if let Some(entry) = session.edit_head(&line.name, &day.date, head_idx, field)? {
                changes.push(entry.change);
            }
        }

        if changes.is_empty() {
            info(format!("Head {head} of {} unchanged.", line.name));
            return Ok(());
        }

        let message = changes.join("; ");
        commit(
            &mut pool,
            &session,
            "set",
            &format!("{} {} head {}", line.name, day.date, head),
            &message,
        )?;
        success(format!("{} · {} · head {head}: {message}", line.name, day.date));

        print_line_day(&session, line, &day, &cfg.separator_char);
    }

    Ok(())
}
