use crate::cli::commands::timestamp_or_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::TrackerLogic;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::time::format_timestamp;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start {
        name,
        description,
        at,
    } = cmd
    {
        let started = timestamp_or_now(at.as_ref())?;
        let store = EventStore::open(&cfg.database)?;

        let running = store.open_events()?;
        if !running.is_empty() {
            warning(format!(
                "{} event(s) already in progress; this one runs alongside.",
                running.len()
            ));
        }

        let id = TrackerLogic::start(&store, name, description.as_deref(), started)?;
        success(format!(
            "Started #{} '{}' at {}",
            id,
            name.trim(),
            format_timestamp(&started)
        ));

        store.close()?;
    }

    Ok(())
}
