use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::TrackerLogic;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::time::{format_timestamp, now};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status = cmd {
        let store = EventStore::open(&cfg.database)?;
        let running = TrackerLogic::running(&store, now(), cfg.break_reminder_minutes)?;

        if running.is_empty() {
            info("No event in progress.");
        }

        for r in &running {
            println!(
                "⏱️  #{} {} | {} (since {})",
                r.event.id,
                r.event.name,
                r.elapsed,
                format_timestamp(&r.event.start_time)
            );
            if r.reminder_due {
                warning(format!(
                    "'{}' has been running for {} minutes, time for a short break!",
                    r.event.name, cfg.break_reminder_minutes
                ));
            }
        }

        store.close()?;
    }

    Ok(())
}
