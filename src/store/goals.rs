//! Persistent daily goals (calories, protein) in a one-row CSV file.

use crate::errors::AppResult;
use crate::models::Goals;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

const HEADER: [&str; 2] = ["calories", "protein"];

pub struct GoalsStore {
    path: PathBuf,
}

impl GoalsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current goals, or the defaults when the file is missing or unreadable.
    pub fn load(&self) -> Goals {
        match self.try_load() {
            Ok(Some(goals)) => goals,
            Ok(None) => Goals::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "goals file unreadable, using defaults");
                Goals::default()
            }
        }
    }

    fn try_load(&self) -> AppResult<Option<Goals>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        for row in reader.records() {
            let row = row?;
            if row.len() < 2 {
                continue;
            }
            if let (Ok(calories), Ok(protein)) = (row[0].parse::<f64>(), row[1].parse::<f64>()) {
                return Ok(Some(Goals { calories, protein }));
            }
            if !row[0].eq_ignore_ascii_case(HEADER[0]) {
                warn!(path = %self.path.display(), "malformed goals row, using defaults");
                return Ok(None);
            }
        }

        Ok(None)
    }

    /// Overwrite the goals file.
    pub fn save(&self, goals: &Goals) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(HEADER)?;
        wtr.write_record([goals.calories.to_string(), goals.protein.to_string()])?;
        wtr.flush()?;
        Ok(())
    }
}
