//! Row <-> Record conversion for the CSV backing files.

use crate::errors::{AppError, AppResult};
use crate::models::record::TIMESTAMP_FORMAT;
use crate::models::{Entry, Meal, Record, RecordKind, Sleep, Water, Workout};
use chrono::NaiveDateTime;
use csv::StringRecord;

/// Serialize a record into its canonical column order.
pub fn to_row(record: &Record) -> Vec<String> {
    let mut row = vec![record.timestamp_str()];

    match &record.entry {
        Entry::Workout(w) => {
            row.push(w.exercise.clone());
            row.push(w.sets.to_string());
            row.push(w.reps.to_string());
            row.push(w.weight.to_string());
        }
        Entry::Meal(m) => {
            row.push(m.description.clone());
            row.push(m.category.clone());
            row.push(m.calories.to_string());
            row.push(m.protein.to_string());
            row.push(m.carbs.to_string());
            row.push(m.fat.to_string());
        }
        Entry::Water(w) => row.push(w.amount_ml.to_string()),
        Entry::Sleep(s) => {
            row.push(s.hours.to_string());
            row.push(s.note.clone());
        }
    }

    row
}

/// True when the row is the header of `kind` (case-insensitive).
pub fn is_header(kind: RecordKind, row: &StringRecord) -> bool {
    let header = kind.header();
    row.len() == header.len()
        && row
            .iter()
            .zip(header)
            .all(|(a, b)| a.trim().eq_ignore_ascii_case(b))
}

/// Parse one stored row. `line` is only used for the error message.
pub fn from_row(kind: RecordKind, row: &StringRecord, line: u64) -> AppResult<Record> {
    let expected = kind.header().len();
    if row.len() != expected {
        return Err(parse_err(
            line,
            format!("expected {} columns, found {}", expected, row.len()),
        ));
    }

    let timestamp = NaiveDateTime::parse_from_str(row[0].trim(), TIMESTAMP_FORMAT)
        .map_err(|_| parse_err(line, format!("invalid timestamp '{}'", &row[0])))?;

    let entry = match kind {
        RecordKind::Workout => Entry::Workout(Workout {
            exercise: row[1].trim().to_string(),
            sets: int_col(row, 2, "sets", line)?,
            reps: int_col(row, 3, "reps", line)?,
            weight: num_col(row, 4, "weight", line)?,
        }),
        RecordKind::Meal => Entry::Meal(Meal {
            description: row[1].trim().to_string(),
            category: row[2].trim().to_string(),
            calories: num_col(row, 3, "calories", line)?,
            protein: num_col(row, 4, "protein", line)?,
            carbs: num_col(row, 5, "carbs", line)?,
            fat: num_col(row, 6, "fat", line)?,
        }),
        RecordKind::Water => Entry::Water(Water {
            amount_ml: num_col(row, 1, "amount_ml", line)?,
        }),
        RecordKind::Sleep => Entry::Sleep(Sleep {
            hours: num_col(row, 1, "hours", line)?,
            note: row[2].trim().to_string(),
        }),
    };

    Ok(Record::new(timestamp, entry))
}

fn num_col(row: &StringRecord, idx: usize, name: &str, line: u64) -> AppResult<f64> {
    let raw = row[idx].trim();
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| parse_err(line, format!("non-numeric {} '{}'", name, raw)))
}

fn int_col(row: &StringRecord, idx: usize, name: &str, line: u64) -> AppResult<u32> {
    let raw = row[idx].trim();
    raw.parse::<u32>()
        .map_err(|_| parse_err(line, format!("non-integer {} '{}'", name, raw)))
}

fn parse_err(line: u64, reason: String) -> AppError {
    AppError::Parse { line, reason }
}
