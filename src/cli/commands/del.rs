use crate::cli::commands::{ask_confirmation, open_manager};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        let mut manager = open_manager(cfg)?;

        let entry = match manager.find_by_prefix(id)? {
            Some(e) => e.clone(),
            None => {
                info(format!("No shift matches '{}'. Nothing deleted.", id));
                return Ok(());
            }
        };

        let description = format!(
            "{} {} - {} ({} hrs)",
            entry.local_start().format("%Y-%m-%d"),
            entry.local_start().format("%H:%M"),
            entry.local_end().format("%H:%M"),
            format_hours(entry.hours())
        );

        if !*force
            && !ask_confirmation(&format!(
                "Delete shift {} ({})? This action is irreversible.",
                entry.short_id(),
                description
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        if manager.delete_time_entry(&entry)? {
            ttlog_quiet(
                manager.store().conn(),
                "del",
                &entry.short_id(),
                &description,
            );
            success(format!("Shift {} has been deleted.", entry.short_id()));
        }
    }

    Ok(())
}
