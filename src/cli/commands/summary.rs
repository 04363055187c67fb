use crate::cli::commands::{open_session, selected_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::registry::{all_lines, find_line};
use crate::core::summary::{
    ALL_HEADS, ALL_ISSUES, ALL_LINES, Filter, SummaryScope, SummaryView, build_summary_rows,
    filter_options,
};
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::{ensure_writable, export_summary_json, import_summary_json, resolve_summary_path};
use crate::models::summary::SummaryRow;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::table::Table;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        day,
        all,
        line,
        issue,
        head,
        options,
        export,
        import,
        force,
    } = cmd
    {
        let (pool, session) = open_session(cfg)?;

        // `--all` and `--day` are exclusive; neither means every planned day.
        let scope = match (day, *all) {
            (Some(d), false) => {
                SummaryScope::SingleDay(selected_day(&session, Some(d.as_str()))?.date)
            }
            _ => SummaryScope::AllDays,
        };

        // Line names are normalised so "3" and "line 3" filter like "Line 3".
        let line_filter = match Filter::parse(line.as_deref(), ALL_LINES) {
            Filter::Only(l) => Filter::Only(find_line(&l)?.name.clone()),
            Filter::All => Filter::All,
        };
        let issue_filter = Filter::parse(issue.as_deref(), ALL_ISSUES);
        let head_filter = Filter::parse(head.as_deref(), ALL_HEADS);

        let base = build_summary_rows(&session.records, all_lines(), &session.days, &scope);

        if let Some(target) = export {
            let path = resolve_summary_path(target, &scope);
            ensure_writable(&path, *force)?;
            export_summary_json(&base, &path)?;
            ttlog_quiet(
                &pool.conn,
                "export",
                &path.to_string_lossy(),
                &format!("{} summary rows", base.len()),
            );
            return Ok(());
        }

        let mut view = SummaryView::new();
        if let Some(file) = import {
            let n = import_summary_json(&mut view, Path::new(file))?;
            ttlog_quiet(&pool.conn, "import", file, &format!("{n} summary rows"));
            success(format!("Imported {n} rows from {file}"));
            if line.is_some() || issue.is_some() || head.is_some() {
                warning("Filters are not applied to imported rows.");
            }
        }

        let rows = view.display_rows(&base, &line_filter, &issue_filter, &head_filter);

        let title = match &scope {
            SummaryScope::SingleDay(d) => format!("Summary: {d}"),
            SummaryScope::AllDays => "Summary: all days".to_string(),
        };
        header(if view.has_import() {
            format!("Summary: imported from {}", import.as_deref().unwrap_or_default())
        } else {
            title
        });

        print_rows(&rows, &cfg.separator_char);

        if *options {
            print_options(&base);
        }
    }

    Ok(())
}

fn print_rows(rows: &[SummaryRow], separator_char: &str) {
    if rows.is_empty() {
        info("No offline heads.");
        return;
    }

    let mut table = Table::with_headers(&["Line", "Section", "Date", "Offline heads", "Issues"]);
    for r in rows {
        table.add_row(vec![
            r.line.clone(),
            r.section.to_string(),
            r.date.clone(),
            r.offline_heads_text(),
            r.issues.clone(),
        ]);
    }
    print!("{}", table.render(separator_char));
    println!("{} row(s)", rows.len());
}

fn print_options(base: &[SummaryRow]) {
    let (issues, heads) = filter_options(base);

    println!("\nIssue filter values:");
    println!("  {ALL_ISSUES}");
    for i in issues {
        println!("  {i}");
    }

    println!("\nHead filter values:");
    println!("  {ALL_HEADS}");
    for h in heads {
        println!("  {h}");
    }
}
