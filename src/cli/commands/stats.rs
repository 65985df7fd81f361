use crate::cli::commands::{open_store, select};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::{aggregate_by, aggregate_by_period};
use crate::errors::{AppError, AppResult};
use crate::models::field::normalize;
use crate::ui::messages::{info, section};
use crate::utils::fmt_number;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        kind,
        field,
        by,
        range,
        exercise,
        category,
        per_exercise,
    } = cmd
    {
        //
        // 1. Field must be numeric for this kind
        //
        let field_name = normalize(field);
        if !kind.numeric_fields().contains(&field_name.as_str()) {
            return Err(AppError::Validation(format!(
                "'{}' is not a numeric {} field. Use one of: {}",
                field,
                kind.as_str(),
                kind.numeric_fields().join(", ")
            )));
        }

        //
        // 2. Load and filter
        //
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

        section(format!("{} {} per {:?}", kind.as_str(), field_name, by).to_lowercase());

        //
        // 3. Aggregate
        //
        let table = if *per_exercise {
            let buckets = aggregate_by_period(
                records.iter().copied(),
                |r| {
                    let name = r
                        .field("exercise")
                        .and_then(|v| v.as_text().map(normalize))
                        .unwrap_or_default();
                    (by.key(r.timestamp), name)
                },
                &field_name,
            );
            let mut table = Table::new(["period", "exercise", "total", "count"]);
            for b in buckets {
                table.add_row(vec![
                    b.key.0.to_string(),
                    b.key.1,
                    fmt_number(b.total),
                    b.count.to_string(),
                ]);
            }
            table
        } else {
            let buckets = aggregate_by(records.iter().copied(), *by, &field_name);
            let mut table = Table::new(["period", "total", "count"]);
            for b in buckets {
                table.add_row(vec![
                    b.key.to_string(),
                    fmt_number(b.total),
                    b.count.to_string(),
                ]);
            }
            table
        };

        print!("{}", table.render());
    }
    Ok(())
}
