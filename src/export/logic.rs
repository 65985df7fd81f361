// src/export/logic.rs

use crate::core::filter::filter_by_date_range;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::Record;
use crate::store::LogStore;
use crate::ui::messages::warning;
use crate::utils::clock::Clock;
use crate::utils::date::parse_range;
use std::fs;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the records of one log.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: output path; parent directories are created
    /// - `range`: `None`, `"all"` or a range expression (see `utils::date::parse_range`)
    ///
    /// Returns the number of exported records.
    pub fn export<C: Clock>(
        store: &LogStore<C>,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        let bounds = parse_range(range)?;

        ensure_writable(path, force)?;

        let records: Vec<&Record> = match bounds {
            Some((start, end)) => {
                filter_by_date_range(store.records(), Some(start), Some(end)).collect()
            }
            None => store.records().iter().collect(),
        };

        if records.is_empty() {
            warning("No records found for selected range.");
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Csv => export_csv(store.kind(), &records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
            ExportFormat::Xlsx => export_xlsx(store.kind(), &records, path)?,
        }

        Ok(records.len())
    }
}
