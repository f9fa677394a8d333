//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// One decimal place, as shown next to each entry and in the summary.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

pub fn format_money(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Render `fraction` (clamped to 0..=1) as a fixed-width text bar.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let f = fraction.clamp(0.0, 1.0);
    let filled = (f * width as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        f * 100.0
    )
}
