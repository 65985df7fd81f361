// src/export/model.rs

use crate::models::{Record, RecordKind};
use crate::store::codec::to_row;
use serde_json::{Map, Value};

/// Column names shared by every export format.
pub(crate) fn get_headers(kind: RecordKind) -> Vec<&'static str> {
    kind.columns()
}

/// Convert a record into a row of strings, in header order.
pub(crate) fn record_to_row(r: &Record) -> Vec<String> {
    let mut row = to_row(r);
    if let Some(w) = r.entry.as_workout() {
        row.push(w.volume().to_string());
    }
    row
}

/// JSON object with typed values (numbers stay numbers).
pub(crate) fn record_to_json(r: &Record) -> Value {
    let mut obj = Map::new();
    for name in get_headers(r.kind()) {
        let value = if name == "date" {
            Value::String(r.timestamp_str())
        } else {
            r.field(name)
                .and_then(|v| serde_json::to_value(v).ok())
                .unwrap_or(Value::Null)
        };
        obj.insert(name.to_string(), value);
    }
    Value::Object(obj)
}
