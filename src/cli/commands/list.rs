use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::display::{DisplayRow, build_rows};
use crate::core::sort::{SortColumn, SortState};
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::models::filter::EventFilter;
use crate::ui::messages::{info, warning};
use crate::utils::date::{self, parse_optional_date};
use crate::utils::table::{Column, Table};
use ansi_term::Colour::Yellow;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        from,
        to,
        today,
        name,
        description,
        sort,
    } = cmd
    {
        let mut filter = EventFilter::new();
        if *today {
            filter = filter.on(date::today());
        } else {
            if let Some(d) = parse_optional_date(from.as_ref())? {
                filter = filter.start_date(d);
            }
            if let Some(d) = parse_optional_date(to.as_ref())? {
                filter = filter.end_date(d);
            }
        }
        if let Some(n) = name {
            filter = filter.name_contains(n.as_str());
        }
        if let Some(d) = description {
            filter = filter.description_contains(d.as_str());
        }

        let store = EventStore::open(&cfg.database)?;
        let outcome = store.query(&filter)?;
        store.close()?;

        for (id, err) in &outcome.malformed {
            warning(format!("Skipped event #{id}: {err}"));
        }

        if outcome.is_empty() {
            info("No events found.");
            return Ok(());
        }

        let mut rows = build_rows(&outcome.events);

        // With no --sort the store's order (newest first) is kept as is.
        let state = sort_state(sort);
        if let Some(state) = &state {
            state.apply(&mut rows);
        }

        print!("{}", render(&rows, state.as_ref()));
        println!("\nTotal: {} event(s).", rows.len());
    }
    Ok(())
}

/// Replay each `--sort` as a header selection.
fn sort_state(selections: &[SortColumn]) -> Option<SortState> {
    let (first, rest) = selections.split_first()?;
    let mut state = SortState::new(*first);
    for col in rest {
        state.select(*col);
    }
    Some(state)
}

fn render(rows: &[DisplayRow], state: Option<&SortState>) -> String {
    let state = state.copied().unwrap_or_default();

    let columns = SortColumn::ALL
        .iter()
        .map(|c| {
            let header = format!("{}{}", c.header(), state.indicator(*c));
            match c {
                SortColumn::Name => Column::truncated(&header, 30),
                SortColumn::Description => Column::truncated(&header, 40),
                _ => Column::new(&header),
            }
        })
        .collect();

    let mut table = Table::new(columns);
    for r in rows {
        let duration = if r.is_in_progress() {
            Yellow.paint(r.duration_str()).to_string()
        } else {
            r.duration_str()
        };

        table.add_row(vec![
            r.id.to_string(),
            r.name.clone(),
            r.description.clone(),
            r.start_date(),
            r.start_time_of_day(),
            r.end_date(),
            r.end_time_of_day(),
            duration,
        ]);
    }

    table.render()
}
