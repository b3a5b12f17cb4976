use crate::db::log::{LogEntry, load_log};
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::utils::table::{strip_ansi, visible_width};
use ansi_term::Colour;

const OP_WIDTH_LIMIT: usize = 40;

/// Colour for each logged operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "start" => Colour::Green,
        "finish" => Colour::Cyan,
        "del" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &EventStore) -> AppResult<()> {
        let entries = load_log(store.conn())?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| op_target(e).len())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_LIMIT);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in &entries {
            let color = color_for_operation(&e.operation);

            let mut label = op_target(e);
            if label.chars().count() > OP_WIDTH_LIMIT {
                label = label.chars().take(OP_WIDTH_LIMIT - 3).collect::<String>() + "...";
            }

            // only the operation word is coloured
            let colored = match label.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(label.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(visible_width(&colored)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                strip_ansi(&e.message),
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
