use crate::cli::commands::timestamp_or_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::display::DisplayRow;
use crate::core::tracker::TrackerLogic;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::time::format_timestamp;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Finish { id, at } = cmd {
        let ended = timestamp_or_now(at.as_ref())?;
        let store = EventStore::open(&cfg.database)?;

        let outcome = TrackerLogic::finish(&store, *id, ended)?;

        if let Some(prev) = outcome.previous_end {
            warning(format!(
                "Event #{} was already finished at {}; end time overwritten.",
                outcome.event.id,
                format_timestamp(&prev)
            ));
        }

        let row = DisplayRow::from_event(&outcome.event);
        success(format!(
            "Event #{} '{}' recorded ({}).",
            row.id,
            row.name,
            row.duration_str()
        ));

        store.close()?;
    }

    Ok(())
}
