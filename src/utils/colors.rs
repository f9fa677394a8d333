/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Remaining-hours color:
/// 0 → green (cap reached)
/// under 8 → yellow
/// otherwise → reset
pub fn color_for_remaining(hours: f64) -> &'static str {
    if hours <= 0.0 {
        GREEN
    } else if hours < 8.0 {
        YELLOW
    } else {
        RESET
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
