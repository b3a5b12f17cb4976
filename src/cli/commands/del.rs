use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::io::{self, Write};

fn ask_confirmation(prompt: &str) -> io::Result<bool> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { ids, yes } = cmd {
        let prompt = format!(
            "Delete {} event(s) ({})? This action is irreversible.",
            ids.len(),
            ids.iter()
                .map(|id| format!("#{id}"))
                .collect::<Vec<_>>()
                .join(", ")
        );

        if !*yes && !ask_confirmation(&prompt)? {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = EventStore::open(&cfg.database)?;
        let report = DeleteLogic::apply(&store, ids)?;

        for id in &report.deleted {
            success(format!("Event #{id} deleted."));
        }
        for id in &report.missing {
            info(format!("Event #{id} does not exist, nothing to delete."));
        }

        store.close()?;
    }

    Ok(())
}
