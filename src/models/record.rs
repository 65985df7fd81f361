use super::entry::Entry;
use super::field::FieldValue;
use super::kind::RecordKind;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Canonical timestamp format used in every backing file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One logged event. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub timestamp: NaiveDateTime, // ⇔ first column "YYYY-MM-DD HH:MM"
    pub entry: Entry,
}

impl Record {
    pub fn new(timestamp: NaiveDateTime, entry: Entry) -> Self {
        Self { timestamp, entry }
    }

    pub fn kind(&self) -> RecordKind {
        self.entry.kind()
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn field(&self, name: &str) -> Option<FieldValue> {
        self.entry.field(name)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.field(name).and_then(|v| v.as_number())
    }
}
