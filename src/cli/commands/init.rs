use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::store::EventStore;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing rTimeTracker…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    let store = EventStore::open(&cfg.database)?;
    store.audit(
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    );
    store.close()?;

    println!("✅ Database initialized at {}", &cfg.database);
    Ok(())
}
