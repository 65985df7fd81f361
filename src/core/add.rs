use crate::errors::AppResult;
use crate::models::{Entry, Record};
use crate::store::LogStore;
use crate::store::audit::audit_or_warn;
use crate::ui::messages::success;
use crate::utils::clock::Clock;
use crate::utils::fmt_number;
use std::path::Path;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Append a validated entry, confirm it to the user and record it in the audit log.
    pub fn apply<C: Clock>(
        store: &mut LogStore<C>,
        entry: Entry,
        audit_file: &Path,
    ) -> AppResult<Record> {
        let record = store.append(entry)?;
        let summary = describe(&record);

        success(format!(
            "{} logged at {}: {}",
            capitalize(record.kind().as_str()),
            record.timestamp_str(),
            summary
        ));

        audit_or_warn(audit_file, "add", record.kind().as_str(), &summary);

        Ok(record)
    }
}

/// One-line human description of a record.
pub fn describe(record: &Record) -> String {
    match &record.entry {
        Entry::Workout(w) => format!(
            "{} {}x{} @ {} (volume {})",
            w.exercise,
            w.sets,
            w.reps,
            fmt_number(w.weight),
            fmt_number(w.volume())
        ),
        Entry::Meal(m) => format!(
            "{} [{}] {} kcal, {} g protein",
            m.description,
            m.category,
            fmt_number(m.calories),
            fmt_number(m.protein)
        ),
        Entry::Water(w) => format!("{} ml", fmt_number(w.amount_ml)),
        Entry::Sleep(s) if s.note.is_empty() => format!("{} h", fmt_number(s.hours)),
        Entry::Sleep(s) => format!("{} h ({})", fmt_number(s.hours), s.note),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
