use crate::cli::commands::open_manager;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::{date, format_hours, time};

/// Log a new shift.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_str,
        start,
        end,
        out_date,
    } = cmd
    {
        //
        // 1. Parse days (end day defaults to start day)
        //
        let start_day =
            date::parse_day(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
        let end_day = match out_date {
            Some(s) => date::parse_day(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => start_day,
        };

        //
        // 2. Parse times into local timestamps
        //
        let start_dt = time::parse_local(start_day, start)?;
        let end_dt = time::parse_local(end_day, end)?;

        //
        // 3. Store
        //
        let mut manager = open_manager(cfg)?;
        let entry = manager.add_time_entry(start_dt, end_dt)?;

        ttlog_quiet(
            manager.store().conn(),
            "add",
            &entry.short_id(),
            &format!(
                "{} → {} ({} h)",
                entry.local_start().format("%Y-%m-%d %H:%M"),
                entry.local_end().format("%Y-%m-%d %H:%M"),
                format_hours(entry.hours())
            ),
        );

        success(format!(
            "Added shift {} on {}: {} - {} ({} hrs)",
            entry.short_id(),
            start_day,
            entry.local_start().format("%H:%M"),
            entry.local_end().format("%H:%M"),
            format_hours(entry.hours())
        ));
        info(format!(
            "This week: {} hrs worked, {} hrs left",
            format_hours(manager.hours_worked_this_week()),
            format_hours(manager.hours_remaining_this_week())
        ));
    }

    Ok(())
}
