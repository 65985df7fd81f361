// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, record_to_json, record_to_row};
use crate::export::notify_export_success;
use crate::models::{Record, RecordKind};
use crate::ui::messages::info;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(records: &[&Record], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let items: Vec<Value> = records.iter().map(|r| record_to_json(r)).collect();
    let json_data = serde_json::to_string_pretty(&items)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, header row first.
pub(crate) fn export_csv(kind: RecordKind, records: &[&Record], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(get_headers(kind))?;

    for r in records {
        wtr.write_record(record_to_row(r))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
