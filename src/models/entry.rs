use super::field::{FieldValue, normalize};
use super::kind::RecordKind;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workout {
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
}

impl Workout {
    /// Derived metric: weight × reps × sets. Never stored.
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps) * f64::from(self.sets)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    pub description: String,
    pub category: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Water {
    pub amount_ml: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sleep {
    pub hours: f64,
    pub note: String,
}

/// Payload of a record; the variant decides the record kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Workout(Workout),
    Meal(Meal),
    Water(Water),
    Sleep(Sleep),
}

impl Entry {
    pub fn kind(&self) -> RecordKind {
        match self {
            Entry::Workout(_) => RecordKind::Workout,
            Entry::Meal(_) => RecordKind::Meal,
            Entry::Water(_) => RecordKind::Water,
            Entry::Sleep(_) => RecordKind::Sleep,
        }
    }

    /// Dynamic field access by (case-insensitive) name.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        let name = normalize(name);
        match self {
            Entry::Workout(w) => match name.as_str() {
                "exercise" => Some(FieldValue::Text(w.exercise.clone())),
                "sets" => Some(FieldValue::Number(f64::from(w.sets))),
                "reps" => Some(FieldValue::Number(f64::from(w.reps))),
                "weight" => Some(FieldValue::Number(w.weight)),
                "volume" => Some(FieldValue::Number(w.volume())),
                _ => None,
            },
            Entry::Meal(m) => match name.as_str() {
                "meal" | "description" => Some(FieldValue::Text(m.description.clone())),
                "category" => Some(FieldValue::Text(m.category.clone())),
                "calories" => Some(FieldValue::Number(m.calories)),
                "protein" => Some(FieldValue::Number(m.protein)),
                "carbs" => Some(FieldValue::Number(m.carbs)),
                "fat" => Some(FieldValue::Number(m.fat)),
                _ => None,
            },
            Entry::Water(w) => match name.as_str() {
                "amount_ml" | "amount" => Some(FieldValue::Number(w.amount_ml)),
                _ => None,
            },
            Entry::Sleep(s) => match name.as_str() {
                "hours" => Some(FieldValue::Number(s.hours)),
                "note" => Some(FieldValue::Text(s.note.clone())),
                _ => None,
            },
        }
    }

    pub fn as_workout(&self) -> Option<&Workout> {
        match self {
            Entry::Workout(w) => Some(w),
            _ => None,
        }
    }
}
