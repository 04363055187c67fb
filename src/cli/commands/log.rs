use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            info("Nothing to do: use `dtlogger log --print` to show the operation log.");
            return Ok(());
        }
        let mut pool = open_db(&cfg.database)?;
        LogLogic::print_log(&mut pool)?;
    }

    Ok(())
}
