use crate::cli::commands::{commit, open_session, selected_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::registry::find_line;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notes { line, text, day } = cmd {
        let (mut pool, mut session) = open_session(cfg)?;
        let line = find_line(line)?;
        let day = selected_day(&session, day.as_deref())?;

        session.set_machine_notes(&line.name, &day.date, text);

        let target = format!("{} {}", line.name, day.date);
        commit(&mut pool, &session, "notes", &target, "Machine notes updated")?;

        if text.is_empty() {
            success(format!("{target}: machine notes cleared"));
        } else {
            success(format!("{target}: machine notes saved"));
        }
    }

    Ok(())
}
