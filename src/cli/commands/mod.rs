pub mod add;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod reset;
pub mod settings;
pub mod summary;
pub mod widget;

use crate::config::Config;
use crate::core::manager::TimeManager;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Open the shared store named by the configuration.
pub(crate) fn open_store(cfg: &Config) -> AppResult<SqliteStore> {
    SqliteStore::open(cfg.database_path(), &cfg.group)
}

pub(crate) fn open_manager(cfg: &Config) -> AppResult<TimeManager<SqliteStore>> {
    Ok(TimeManager::new(open_store(cfg)?))
}

/// Ask a yes/no confirmation from the user. EOF counts as "no".
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
