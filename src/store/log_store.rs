//! Append-only CSV log for a single record kind.

use crate::errors::{AppError, AppResult};
use crate::models::{Entry, Record, RecordKind};
use crate::store::codec;
use crate::utils::clock::{Clock, SystemClock};
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A stored row that could not be parsed and was left out of the result.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

/// Result of a full scan of the backing file.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedRow>,
}

/// Owns the records of one kind. Records only ever grow: there is no edit or delete.
///
/// The backing file is read once on `open`; afterwards the in-memory index is
/// extended on every successful `append`.
pub struct LogStore<C: Clock = SystemClock> {
    path: PathBuf,
    kind: RecordKind,
    clock: C,
    records: Vec<Record>,
    skipped: Vec<SkippedRow>,
}

impl LogStore<SystemClock> {
    pub fn open(path: impl Into<PathBuf>, kind: RecordKind) -> AppResult<Self> {
        Self::open_with_clock(path, kind, SystemClock)
    }
}

impl<C: Clock> LogStore<C> {
    pub fn open_with_clock(path: impl Into<PathBuf>, kind: RecordKind, clock: C) -> AppResult<Self> {
        let mut store = Self {
            path: path.into(),
            kind,
            clock,
            records: Vec::new(),
            skipped: Vec::new(),
        };

        let report = store.load_all()?;
        debug!(
            kind = kind.as_str(),
            path = %store.path.display(),
            records = report.records.len(),
            skipped = report.skipped.len(),
            "log opened"
        );
        store.records = report.records;
        store.skipped = report.skipped;

        Ok(store)
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Rows left out when the log was opened.
    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stamp `entry` with the current minute and write it at the end of the file.
    ///
    /// The file (with header) and its parent directories are created on first use.
    /// On error nothing is added to the index.
    pub fn append(&mut self, entry: Entry) -> AppResult<Record> {
        if entry.kind() != self.kind {
            return Err(AppError::Validation(format!(
                "cannot append a {} entry to the {} log",
                entry.kind().as_str(),
                self.kind.as_str()
            )));
        }

        let record = Record::new(self.clock.now_minute(), entry);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;

        let len = file.metadata()?.len();
        if len > 0 && !ends_with_newline(&mut file, len)? {
            // a previous write was cut short: start on a fresh line
            file.write_all(b"\n")?;
        }

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if len == 0 {
            wtr.write_record(self.kind.header())?;
        }
        wtr.write_record(codec::to_row(&record))?;
        wtr.flush()?;

        debug!(
            kind = self.kind.as_str(),
            timestamp = %record.timestamp_str(),
            "record appended"
        );

        self.records.push(record.clone());
        Ok(record)
    }

    /// Create the backing file with just its header if it does not exist yet.
    /// Returns true when the file was created.
    pub fn init_file(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(self.kind.header())?;
        wtr.flush()?;
        Ok(true)
    }

    /// Read the whole backing file again.
    ///
    /// A missing file is an empty log. Malformed rows are skipped and listed in the report;
    /// header rows are ignored wherever they appear.
    pub fn load_all(&self) -> AppResult<LoadReport> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LoadReport::default()),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut report = LoadReport::default();

        for result in reader.records() {
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                        return Err(e.into());
                    }
                    let line = e.position().map(|p| p.line()).unwrap_or(0);
                    self.skip(&mut report, line, e.to_string());
                    continue;
                }
            };

            let line = row.position().map(|p| p.line()).unwrap_or(0);

            if codec::is_header(self.kind, &row) {
                continue;
            }

            match codec::from_row(self.kind, &row, line) {
                Ok(record) => report.records.push(record),
                Err(AppError::Parse { line, reason }) => self.skip(&mut report, line, reason),
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }

    // callers decide how to surface skipped rows; see `LoadReport::skipped`
    fn skip(&self, report: &mut LoadReport, line: u64, reason: String) {
        debug!(
            kind = self.kind.as_str(),
            path = %self.path.display(),
            line,
            %reason,
            "skipping malformed row"
        );
        report.skipped.push(SkippedRow { line, reason });
    }
}

fn ends_with_newline(file: &mut File, len: u64) -> io::Result<bool> {
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
