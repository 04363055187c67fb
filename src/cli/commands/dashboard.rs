use crate::cli::commands::{open_session, selected_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::metrics::{
    EfficiencyMetric, aggregate_running, average_efficiency, down_and_fixed_by_day, efficiency,
    fixed_efficiency, is_running, issue_distribution, section_running,
};
use crate::core::registry::{all_lines, lines_by_section};
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::day::DaySpec;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, ORANGE, RED, color_for_running, paint};
use crate::utils::formatting::bold;
use crate::utils::table::Table;
use crate::utils::{bar, percent_label};

const BAR_WIDTH: usize = 30;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { day, expand } = cmd {
        let (_pool, session) = open_session(cfg)?;
        let day = selected_day(&session, day.as_deref())?;

        header(format!("Dashboard: {}", day.display()));

        print_overview(&session, &day);
        print_sections(&session, &day, *expand, &cfg.separator_char);
        print_downtime(&session);
        print_issues(&session, &day, &cfg.separator_char);
    }
    Ok(())
}

fn print_overview(session: &Session, day: &DaySpec) {
    let store = &session.records;
    let lines = all_lines();
    let (running, total) = aggregate_running(store, lines, &day.date);

    println!("{} {running}/{total}", bold("Lines running:"));
    println!(
        "{} {}",
        bold("Average efficiency:"),
        percent_label(average_efficiency(
            store,
            lines,
            &day.date,
            EfficiencyMetric::Efficiency
        ))
    );
    println!(
        "{} {}",
        bold("Average fixed efficiency:"),
        percent_label(average_efficiency(
            store,
            lines,
            &day.date,
            EfficiencyMetric::FixedEfficiency
        ))
    );
    if running == 0 {
        println!("{}", paint("(no line marked as running)", GREY));
    }
}

fn print_sections(session: &Session, day: &DaySpec, expand: bool, separator_char: &str) {
    let store = &session.records;
    println!("\n{}", bold("Sections"));

    if !expand {
        let mut table = Table::with_headers(&["Section", "Running"]);
        for s in section_running(store, &day.date) {
            table.add_row(vec![s.section.to_string(), format!("{}/{}", s.running, s.total)]);
        }
        print!("{}", table.render(separator_char));
        return;
    }

    let statuses = section_running(store, &day.date);
    for ((section, lines), status) in lines_by_section().into_iter().zip(statuses) {
        println!(
            "\n{} ({}/{} running)",
            bold(section.as_str()),
            status.running,
            status.total
        );

        let mut table = Table::with_headers(&["Line", "Running", "Efficiency", "Fixed"]);
        for line in lines {
            let running = is_running(store, &line.name, &day.date);
            table.add_row(vec![
                line.name.clone(),
                paint(if running { "Yes" } else { "No" }, color_for_running(running)),
                percent_label(efficiency(store, &line.name, &day.date)),
                percent_label(fixed_efficiency(store, &line.name, &day.date)),
            ]);
        }
        print!("{}", table.render(separator_char));
    }
}

fn print_downtime(session: &Session) {
    let dated: Vec<DaySpec> = session
        .days
        .iter()
        .filter(|d| !d.date.is_empty())
        .cloned()
        .collect();
    println!("\n{}", bold("Heads down / fixed per day"));

    if dated.is_empty() {
        info("No planned day has a date yet.");
        return;
    }

    let rows = down_and_fixed_by_day(&session.records, all_lines(), &dated);
    let max = rows.iter().map(|r| r.down).max().unwrap_or(0);
    let label_w = rows
        .iter()
        .map(|r| r.day.chars().count() + r.date.len() + 3)
        .max()
        .unwrap_or(0);

    for r in rows {
        let label = format!("{} ({})", r.day, r.date);
        println!(
            "{label:<label_w$} down  {:>3} {}",
            r.down,
            paint(&bar(r.down, max, BAR_WIDTH), RED)
        );
        println!(
            "{:<label_w$} fixed {:>3} {}",
            "",
            r.fixed,
            paint(&bar(r.fixed, max, BAR_WIDTH), ORANGE)
        );
    }
}

fn print_issues(session: &Session, day: &DaySpec, separator_char: &str) {
    let counts = issue_distribution(&session.records, all_lines(), &day.date);
    println!("\n{}", bold("Issue distribution"));

    if counts.is_empty() {
        info("No issues reported for this day.");
        return;
    }

    let total: usize = counts.values().sum();
    let mut table = Table::with_headers(&["Issue", "Heads", ""]);
    for (issue, n) in counts {
        table.add_row(vec![issue.to_string(), n.to_string(), bar(n, total, BAR_WIDTH)]);
    }
    print!("{}", table.render(separator_char));
}
