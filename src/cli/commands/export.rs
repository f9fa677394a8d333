use crate::cli::commands::open_manager;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::time_entry::TimeEntry;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        week,
        force,
    } = cmd
    {
        let manager = open_manager(cfg)?;
        let path = expand_tilde(file);

        let entries: Vec<&TimeEntry> = if *week {
            manager.current_week_entries()
        } else {
            manager.entries().iter().collect()
        };

        let written = ExportLogic::export(entries, *format, &path, *force)?;

        if written > 0 {
            ttlog_quiet(
                manager.store().conn(),
                "export",
                format.as_str(),
                &format!("{} shifts → {}", written, path.display()),
            );
        }
    }
    Ok(())
}
