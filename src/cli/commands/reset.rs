use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::db::initialize::open_db;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes && !confirm("This clears all planned dates, head records and history.") {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = open_db(&cfg.database)?;
        Session::reset_all(&mut pool)?;
        ttlog_quiet(&pool.conn, "reset", "kv_store", "All saved data cleared");

        success("All data cleared.");
    }

    Ok(())
}
