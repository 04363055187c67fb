use crate::cli::commands::{open_session, selected_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::metrics::{efficiency, fixed_efficiency, is_running};
use crate::core::registry::{find_line, neighbours};
use crate::core::session::Session;
use crate::core::store::get_day_entry;
use crate::errors::AppResult;
use crate::models::day::DaySpec;
use crate::models::line::Line;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, color_for_head, color_for_running, paint};
use crate::utils::percent_label;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { line, day } = cmd {
        let (_pool, session) = open_session(cfg)?;
        let line = find_line(line.as_deref().unwrap_or(&cfg.default_line))?;
        let day = selected_day(&session, day.as_deref())?;

        print_line_day(&session, line, &day, &cfg.separator_char);
    }
    Ok(())
}

/// Head table, running flag, efficiencies and machine notes of one line/day.
pub(crate) fn print_line_day(session: &Session, line: &Line, day: &DaySpec, separator_char: &str) {
    let store = &session.records;
    let entry = get_day_entry(store, &line.name, &day.date);
    let running = is_running(store, &line.name, &day.date);

    header(format!("{} · {}", line.label(), day.display()));

    println!(
        "Machine running: {}",
        paint(if running { "Yes" } else { "No" }, color_for_running(running))
    );

    let mut table = Table::with_headers(&["Head", "Offline", "Issue", "Repaired", "Notes"]);
    for h in &entry.heads {
        let color = color_for_head(h);
        table.add_row(vec![
            h.head.to_string(),
            paint(h.offline.as_str(), color),
            h.issue.to_string(),
            h.repaired.to_string(),
            h.notes.clone(),
        ]);
    }
    println!();
    print!("{}", table.render(separator_char));

    println!(
        "\nEfficiency: {}   Fixed efficiency: {}",
        percent_label(efficiency(store, &line.name, &day.date)),
        percent_label(fixed_efficiency(store, &line.name, &day.date))
    );

    if entry.machine_notes.is_empty() {
        println!("Machine notes: {}", paint("(none)", GREY));
    } else {
        println!("Machine notes: {}", entry.machine_notes);
    }

    let (prev, next) = neighbours(line);
    println!("{}", paint(&format!("◀ {prev} | {next} ▶"), GREY));
}
