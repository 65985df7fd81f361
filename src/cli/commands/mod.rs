pub mod add;
pub mod backup;
pub mod config;
pub mod export;
pub mod goals;
pub mod init;
pub mod list;
pub mod log;
pub mod progress;
pub mod stats;
pub mod today;

use crate::config::Config;
use crate::core::filter::{filter_by_date_range, filter_by_field};
use crate::errors::{AppError, AppResult};
use crate::models::{FieldValue, Record, RecordKind};
use crate::store::LogStore;
use crate::ui::messages::warning;
use crate::utils::date::parse_range;
use crate::utils::fmt_number;

/// Open the log of `kind` from the configured data directory, warning about skipped rows.
pub(crate) fn open_store(cfg: &Config, kind: RecordKind) -> AppResult<LogStore> {
    let path = cfg.log_file(kind);
    let store = LogStore::open(&path, kind)?;

    let skipped = store.skipped();
    if !skipped.is_empty() {
        warning(format!(
            "Skipped {} malformed row(s) in {}",
            skipped.len(),
            path.display()
        ));
        for s in skipped {
            warning(format!("  line {}: {}", s.line, s.reason));
        }
    }

    Ok(store)
}

/// Apply the common `--range`, `--exercise` and `--category` filters.
///
/// `--exercise` only exists on workouts and `--category` only on meals.
pub(crate) fn select<'a>(
    kind: RecordKind,
    records: &'a [Record],
    range: Option<&str>,
    exercise: Option<&str>,
    category: Option<&str>,
) -> AppResult<Vec<&'a Record>> {
    if exercise.is_some() && kind != RecordKind::Workout {
        return Err(flag_error("--exercise", kind, RecordKind::Workout));
    }
    if category.is_some() && kind != RecordKind::Meal {
        return Err(flag_error("--category", kind, RecordKind::Meal));
    }

    let (start, end) = parse_range(range)?.unzip();
    let mut out: Vec<&Record> = filter_by_date_range(records, start, end).collect();

    if let Some(x) = exercise {
        out = filter_by_field(out, "exercise", x).collect();
    }
    if let Some(c) = category {
        out = filter_by_field(out, "category", c).collect();
    }

    Ok(out)
}

fn flag_error(flag: &str, kind: RecordKind, expected: RecordKind) -> AppError {
    AppError::Validation(format!(
        "{} only applies to {} records, not {}",
        flag,
        expected.as_str(),
        kind.as_str()
    ))
}

/// Display row: stored columns (numbers tidied) plus the derived volume for workouts.
pub(crate) fn display_row(r: &Record) -> Vec<String> {
    let mut row = vec![r.timestamp_str()];
    for name in r.kind().header().iter().skip(1) {
        let cell = match r.field(name) {
            Some(FieldValue::Number(n)) => fmt_number(n),
            Some(FieldValue::Text(t)) => t,
            None => String::new(),
        };
        row.push(cell);
    }
    if let Some(w) = r.entry.as_workout() {
        row.push(fmt_number(w.volume()));
    }
    row
}
