//! ANSI color helpers for head and line states.

use crate::core::metrics::Percent;
use crate::models::head::HeadRecord;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const ORANGE: &str = "\x1b[38;5;208m";
pub const CYAN: &str = "\x1b[36m";

/// Active → green, offline but fixed → orange, offline → red.
pub fn color_for_head(h: &HeadRecord) -> &'static str {
    if !h.is_offline() {
        GREEN
    } else if h.is_fixed() {
        ORANGE
    } else {
        RED
    }
}

pub fn color_for_running(running: bool) -> &'static str {
    if running { GREEN } else { GREY }
}

/// ≥ 90% green, ≥ 70% yellow, below red.
pub fn color_for_percent(p: Percent) -> &'static str {
    match p.hundredths() {
        9_000.. => GREEN,
        7_000.. => YELLOW,
        _ => RED,
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
