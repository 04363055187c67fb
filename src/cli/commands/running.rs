use crate::cli::commands::{commit, open_session, selected_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::registry::find_line;
use crate::errors::{AppError, AppResult};
use crate::models::day::RunningFlag;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Running { line, state, day } = cmd {
        let flag = RunningFlag::from_input(state).ok_or_else(|| AppError::InvalidValue {
            field: "running",
            value: state.clone(),
        })?;

        let (mut pool, mut session) = open_session(cfg)?;
        let line = find_line(line)?;
        let day = selected_day(&session, day.as_deref())?;

        session.set_running(&line.name, &day.date, flag);

        let target = format!("{} {}", line.name, day.date);
        commit(
            &mut pool,
            &session,
            "running",
            &target,
            &format!("Running set to {}", flag.as_str()),
        )?;

        success(format!("{target}: running = {}", flag.as_str()));
    }

    Ok(())
}
