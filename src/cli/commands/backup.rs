use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        info(format!("Backing up {}", cfg.database));

        let mut pool = open_db(&cfg.database)?;
        let written = BackupLogic::backup(&mut pool, file, *compress, *force)?;

        let size = fs::metadata(&written).map(|m| m.len()).unwrap_or(0);
        info(format!("{} ({:.1} KB)", written.display(), size as f64 / 1024.0));
    }

    Ok(())
}
