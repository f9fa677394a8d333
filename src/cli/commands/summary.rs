use crate::cli::commands::open_manager;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::WEEKLY_HOURS_CAP;
use crate::errors::AppResult;
use crate::ui::messages::{field, header};
use crate::utils::colors::{color_for_remaining, colorize};
use crate::utils::formatting::progress_bar;
use crate::utils::{format_hours, format_money};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { json } = cmd {
        let manager = open_manager(cfg)?;
        let summary = manager.week_summary();

        if *json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        let settings = manager.settings();
        let cur = &cfg.currency_symbol;

        header(format!("Week {}", summary.range.label()));
        field("Shifts", summary.entries);
        field(
            "Hours",
            format!(
                "{} / {}",
                format_hours(summary.hours_worked),
                format_hours(WEEKLY_HOURS_CAP)
            ),
        );
        field(
            "Left",
            colorize(
                &format_hours(summary.hours_remaining),
                color_for_remaining(summary.hours_remaining),
            ),
        );
        field("Gross", format_money(cur, summary.gross_earnings));
        field(
            "Net",
            format!(
                "{} (after {:.0}% tax, {}/h)",
                format_money(cur, summary.net_earnings),
                settings.tax_rate * 100.0,
                format_money(cur, settings.hourly_wage)
            ),
        );
        field("Progress", progress_bar(summary.progress, 20));
    }

    Ok(())
}
