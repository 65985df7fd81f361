//! Daily nutrition totals against the saved goals.

use crate::core::aggregate::day_total;
use crate::models::{Goals, Record};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct NutritionProgress {
    pub day: NaiveDate,
    pub calories: f64,
    pub protein: f64,
    pub goals: Goals,
}

impl NutritionProgress {
    pub fn for_day(meals: &[Record], day: NaiveDate, goals: Goals) -> Self {
        Self {
            day,
            calories: day_total(meals, day, "calories"),
            protein: day_total(meals, day, "protein"),
            goals,
        }
    }

    /// Fraction of the calorie goal reached, capped at 1.0.
    pub fn calories_ratio(&self) -> f64 {
        ratio(self.calories, self.goals.calories)
    }

    /// Fraction of the protein goal reached, capped at 1.0.
    pub fn protein_ratio(&self) -> f64 {
        ratio(self.protein, self.goals.protein)
    }
}

// a zero goal is always met
fn ratio(total: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 1.0;
    }
    (total / goal).clamp(0.0, 1.0)
}
