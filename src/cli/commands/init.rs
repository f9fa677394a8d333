use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = cfg.database_path();

    println!("⚙️  Initializing shifttrack…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", db_path.display());

    let store = SqliteStore::open(&db_path, &cfg.group)?;

    println!("✅ Database initialized at {}", db_path.display());

    ttlog_quiet(
        store.conn(),
        "init",
        store.scope(),
        &format!("Database initialized at {}", db_path.display()),
    );

    println!("🎉 shifttrack initialization completed!");
    Ok(())
}
