use clap::ValueEnum;
use serde::Serialize;

/// The kinds of record the application logs. Each kind lives in its own file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Workout,
    Meal,
    Water,
    Sleep,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Workout,
        RecordKind::Meal,
        RecordKind::Water,
        RecordKind::Sleep,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Workout => "workout",
            RecordKind::Meal => "meal",
            RecordKind::Water => "water",
            RecordKind::Sleep => "sleep",
        }
    }

    /// Name of the backing file inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            RecordKind::Workout => "workout_log.csv",
            RecordKind::Meal => "food_log.csv",
            RecordKind::Water => "water_log.csv",
            RecordKind::Sleep => "sleep_log.csv",
        }
    }

    /// Canonical header row. The first column is always the timestamp.
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Workout => &["date", "exercise", "sets", "reps", "weight"],
            RecordKind::Meal => &[
                "date", "meal", "category", "calories", "protein", "carbs", "fat",
            ],
            RecordKind::Water => &["date", "amount_ml"],
            RecordKind::Sleep => &["date", "hours", "note"],
        }
    }

    /// Stored columns plus the derived ones (volume for workouts).
    pub fn columns(&self) -> Vec<&'static str> {
        let mut cols = self.header().to_vec();
        if *self == RecordKind::Workout {
            cols.push("volume");
        }
        cols
    }

    /// Fields that can be summed by `stats`.
    pub fn numeric_fields(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Workout => &["sets", "reps", "weight", "volume"],
            RecordKind::Meal => &["calories", "protein", "carbs", "fat"],
            RecordKind::Water => &["amount_ml"],
            RecordKind::Sleep => &["hours"],
        }
    }
}
