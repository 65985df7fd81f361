use crate::cli::commands::{display_row, open_store, select};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, section};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        kind,
        range,
        exercise,
        category,
    } = cmd
    {
        let store = open_store(cfg, *kind)?;
        let records = select(
            *kind,
            store.records(),
            range.as_deref(),
            exercise.as_deref(),
            category.as_deref(),
        )?;

        if records.is_empty() {
            info(format!("No {} records found.", kind.as_str()));
            return Ok(());
        }

        section(format!("{} log", kind.as_str()));

        let mut table = Table::new(kind.columns());
        for r in &records {
            table.add_row(display_row(r));
        }
        print!("{}", table.render());
        println!("{} record(s)", records.len());
    }
    Ok(())
}
