use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::kv::kv_info;
use crate::db::log::load_log;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};
use std::fs;

fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!();
    println!("{CYAN}• File:{RESET} {YELLOW}{db_path}{RESET}");
    println!("{CYAN}• Size:{RESET} {file_kb:.1} KB");

    let blobs = kv_info(&pool.conn)?;
    if blobs.is_empty() {
        println!("{CYAN}• Saved state:{RESET} none (defaults will be used)");
    } else {
        println!("{CYAN}• Saved state:{RESET}");
        for (key, size, updated_at) in blobs {
            println!("    {key:<10} {size:>8} bytes  updated {updated_at}");
        }
    }

    let log_rows = load_log(&pool.conn)?.len();
    println!("{CYAN}• Log rows:{RESET} {GREEN}{log_rows}{RESET}\n");
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            println!("{CYAN}▶ Running migrations…{RESET}");
            run_pending_migrations(&pool.conn)?;
            println!("{GREEN}✔ Migration completed.{RESET}\n");
        }

        if *info {
            run_pending_migrations(&pool.conn)?;
            print_db_info(&pool, &cfg.database)?;
        }

        if *check {
            println!("{CYAN}▶ Running integrity check…{RESET}");

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{GREEN}✔ Integrity check passed.{RESET}\n");
            } else {
                println!("{RED}✘ Integrity check failed:{RESET} {integrity}\n");
            }
        }

        if *vacuum {
            println!("{CYAN}▶ Running VACUUM…{RESET}");
            pool.conn.execute_batch("VACUUM;")?;
            println!("{GREEN}✔ Vacuum completed.{RESET}\n");
        }
    }

    Ok(())
}
