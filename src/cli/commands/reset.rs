use crate::cli::commands::{ask_confirmation, open_manager};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { force } = cmd {
        let mut manager = open_manager(cfg)?;
        let count = manager.entries().len();

        if !*force
            && !ask_confirmation(&format!(
                "Delete all {} shifts and restore default settings? This action is irreversible.",
                count
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        manager.reset_all_data()?;
        ttlog_quiet(
            manager.store().conn(),
            "reset",
            "",
            &format!("Removed {} shifts, settings restored to defaults", count),
        );
        success("All data has been reset.");
    }

    Ok(())
}
