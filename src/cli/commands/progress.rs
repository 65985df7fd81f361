use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::progress_series;
use crate::errors::AppResult;
use crate::models::RecordKind;
use crate::models::field::normalize;
use crate::models::record::TIMESTAMP_FORMAT;
use crate::ui::messages::{section, warning};
use crate::utils::fmt_number;
use crate::utils::table::Table;
use std::collections::HashMap;

/// Weight used over time, with the change from the first set of the same exercise.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Progress { exercise } = cmd {
        let exercise = exercise.as_deref().map(str::trim);
        let title = exercise.unwrap_or("all exercises");

        let store = open_store(cfg, RecordKind::Workout)?;
        let series = progress_series(store.records(), exercise);

        if series.is_empty() {
            warning(format!("No data to graph for '{}'.", title));
            return Ok(());
        }

        section(format!("Progress: {}", title));

        let unit = format!("weight ({})", cfg.weight_unit);
        let mut table = match exercise {
            Some(_) => Table::new(["date", unit.as_str(), "change"]),
            None => Table::new(["date", "exercise", unit.as_str(), "change"]),
        };

        let mut first: HashMap<String, f64> = HashMap::new();
        for p in &series {
            let base = *first.entry(normalize(&p.exercise)).or_insert(p.weight);
            let delta = p.weight - base;
            let change = if delta > 0.0 {
                format!("+{}", fmt_number(delta))
            } else {
                fmt_number(delta)
            };

            let mut row = vec![p.timestamp.format(TIMESTAMP_FORMAT).to_string()];
            if exercise.is_none() {
                row.push(p.exercise.clone());
            }
            row.push(fmt_number(p.weight));
            row.push(change);
            table.add_row(row);
        }
        print!("{}", table.render());
    }
    Ok(())
}
