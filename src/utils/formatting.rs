//! Formatting utilities used for CLI outputs.

use crate::core::metrics::Percent;
use crate::utils::colors::{color_for_percent, paint};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// "92.86%" coloured by threshold.
pub fn percent_label(p: Percent) -> String {
    paint(&format!("{p}%"), color_for_percent(p))
}

/// Horizontal bar of `width` cells for `value` out of `max`.
pub fn bar(value: usize, max: usize, width: usize) -> String {
    if max == 0 || width == 0 {
        return String::new();
    }
    let filled = (value * width).div_ceil(max).min(width);
    format!("{}{}", "█".repeat(filled), "·".repeat(width - filled))
}
