pub mod backup;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod days;
pub mod history;
pub mod init;
pub mod log;
pub mod notes;
pub mod reset;
pub mod running;
pub mod set;
pub mod show;
pub mod summary;

use crate::config::Config;
use crate::core::days::resolve_day;
use crate::core::session::Session;
use crate::db::initialize::open_db;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day::DaySpec;

/// Open the database (running migrations) and load the saved session.
pub(crate) fn open_session(cfg: &Config) -> AppResult<(DbPool, Session)> {
    let pool = open_db(&cfg.database)?;
    let session = Session::load(&pool, cfg.default_days);
    Ok((pool, session))
}

/// Persist the session and write one internal log row.
pub(crate) fn commit(
    pool: &mut DbPool,
    session: &Session,
    operation: &str,
    target: &str,
    message: &str,
) -> AppResult<()> {
    session.save(pool)?;
    ttlog_quiet(&pool.conn, operation, target, message);
    Ok(())
}

/// Day picked with `--day`, or the selected day of the session.
pub(crate) fn selected_day(session: &Session, day: Option<&str>) -> AppResult<DaySpec> {
    let spec = match day {
        Some(d) => resolve_day(&session.days, d)?.clone(),
        None => session
            .days
            .iter()
            .find(|d| d.date == session.current_day)
            .cloned()
            .ok_or_else(|| AppError::InvalidDayIndex("no planned days".to_string()))?,
    };

    if spec.date.is_empty() {
        let n = spec.id.trim_start_matches("day");
        return Err(AppError::InvalidDayIndex(format!(
            "{} has no date yet; set one with `dtlogger days --set {n} YYYY-MM-DD`",
            spec.label
        )));
    }
    Ok(spec)
}
