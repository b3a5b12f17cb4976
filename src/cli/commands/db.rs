use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{pending_count, run_pending_migrations};
use crate::db::stats;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use ansi_term::Colour::{Cyan, Green, Red};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // opening already applies migrations; --migrate reports on them
        let store = EventStore::open(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}", Cyan.paint("▶ Running migrations…"));
            run_pending_migrations(store.conn())?;
            let pending = pending_count(store.conn())?;
            println!(
                "{}\n",
                Green.paint(format!("✔ Migration completed ({pending} pending)."))
            );
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&store, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}", Cyan.paint("▶ Running integrity check…"));

            let integrity: String =
                store
                    .conn()
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}\n", Green.paint("✔ Integrity check passed."));
            } else {
                println!("{} {}\n", Red.paint("✘ Integrity check failed:"), integrity);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}", Cyan.paint("▶ Running VACUUM…"));
            store.conn().execute_batch("VACUUM;")?;
            println!("{}\n", Green.paint("✔ Vacuum completed."));
        }

        store.close()?;
    }

    Ok(())
}
