//! dtlogger main entrypoint.

use dtlogger::run;
use dtlogger::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
