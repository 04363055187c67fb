use crate::cli::commands::{commit, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::registry::find_line;
use crate::core::summary::{ALL_HEADS, ALL_LINES, Filter};
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::{ensure_writable, export_history_csv};
use crate::models::history::HistoryEntry;
use crate::ui::messages::{confirm, header, info, success, warning};
use crate::utils::table::Table;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History {
        line,
        head,
        export,
        delete,
        clear,
        yes,
        force,
    } = cmd
    {
        let (mut pool, mut session) = open_session(cfg)?;

        // 1️⃣ Destructive operations
        if let Some(id) = delete {
            if !*yes && !confirm(&format!("Delete history entry #{id}?")) {
                info("Operation cancelled.");
                return Ok(());
            }
            if session.delete_history(*id) {
                commit(
                    &mut pool,
                    &session,
                    "history_delete",
                    &format!("#{id}"),
                    "History entry deleted",
                )?;
                success(format!("History entry #{id} deleted."));
            } else {
                warning(format!("No history entry with id {id}."));
            }
            return Ok(());
        }

        if *clear {
            if !*yes && !confirm("Delete ALL history entries?") {
                info("Operation cancelled.");
                return Ok(());
            }
            let n = session.history.len();
            session.clear_history();
            commit(
                &mut pool,
                &session,
                "history_clear",
                "history",
                &format!("{n} entries removed"),
            )?;
            success(format!("History cleared ({n} entries)."));
            return Ok(());
        }

        // 2️⃣ Filters
        let line_filter = match Filter::parse(line.as_deref(), ALL_LINES) {
            Filter::Only(l) => Filter::Only(find_line(&l)?.name.clone()),
            Filter::All => Filter::All,
        };
        let head_filter = Filter::parse(head.as_deref(), ALL_HEADS);
        let entries = session.history.filter(&line_filter, &head_filter);

        // 3️⃣ Export or list
        if let Some(file) = export {
            if entries.is_empty() {
                warning("No history entries to export.");
                return Ok(());
            }
            let path = Path::new(file);
            ensure_writable(path, *force)?;
            export_history_csv(&entries, path)?;
            ttlog_quiet(
                &pool.conn,
                "export",
                file,
                &format!("{} history entries", entries.len()),
            );
            return Ok(());
        }

        print_entries(&entries, &cfg.separator_char);
    }

    Ok(())
}

/// Newest first.
fn print_entries(entries: &[&HistoryEntry], separator_char: &str) {
    header("Change history");

    if entries.is_empty() {
        info("No history entries.");
        return;
    }

    let mut table = Table::with_headers(&["#", "Timestamp", "Line", "Date", "Head", "Change"]);
    for e in entries.iter().rev() {
        table.add_row(vec![
            e.id.to_string(),
            e.local_timestamp(),
            e.line.clone(),
            e.date.clone(),
            e.head.to_string(),
            e.change.clone(),
        ]);
    }
    print!("{}", table.render(separator_char));
    println!("{} entr{}", entries.len(), if entries.len() == 1 { "y" } else { "ies" });
}
