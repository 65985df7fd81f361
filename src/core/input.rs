//! Validation of raw user input into log entries.
//!
//! Nothing is coerced: a value that is not a valid number is rejected
//! before it can reach the log.

use crate::errors::{AppError, AppResult};
use crate::models::{Entry, Meal, Sleep, Water, Workout};

pub fn workout(exercise: &str, sets: &str, reps: &str, weight: &str) -> AppResult<Entry> {
    Ok(Entry::Workout(Workout {
        exercise: require_text("exercise", exercise)?,
        sets: parse_count("sets", sets)?,
        reps: parse_count("reps", reps)?,
        weight: parse_amount("weight", weight)?,
    }))
}

#[allow(clippy::too_many_arguments)]
pub fn meal(
    description: &str,
    category: &str,
    calories: &str,
    protein: &str,
    carbs: Option<&str>,
    fat: Option<&str>,
    categories: &[String],
) -> AppResult<Entry> {
    Ok(Entry::Meal(Meal {
        description: require_text("meal description", description)?,
        category: resolve_category(category, categories)?,
        calories: parse_amount("calories", calories)?,
        protein: parse_amount("protein", protein)?,
        carbs: carbs.map(|v| parse_amount("carbs", v)).transpose()?.unwrap_or(0.0),
        fat: fat.map(|v| parse_amount("fat", v)).transpose()?.unwrap_or(0.0),
    }))
}

pub fn water(amount_ml: &str) -> AppResult<Entry> {
    Ok(Entry::Water(Water {
        amount_ml: parse_positive("amount", amount_ml)?,
    }))
}

pub fn sleep(hours: &str, note: Option<&str>) -> AppResult<Entry> {
    let hours = parse_positive("hours", hours)?;
    if hours > 24.0 {
        return Err(AppError::Validation(format!(
            "hours must be at most 24, got {}",
            hours
        )));
    }
    Ok(Entry::Sleep(Sleep {
        hours,
        note: note.map(|n| n.trim().to_string()).unwrap_or_default(),
    }))
}

/// Finite number ≥ 0.
pub fn parse_amount(name: &str, raw: &str) -> AppResult<f64> {
    let v = parse_number(name, raw)?;
    if v < 0.0 {
        return Err(AppError::Validation(format!(
            "{} cannot be negative, got {}",
            name, v
        )));
    }
    Ok(v)
}

/// Finite number > 0.
pub fn parse_positive(name: &str, raw: &str) -> AppResult<f64> {
    let v = parse_number(name, raw)?;
    if v <= 0.0 {
        return Err(AppError::Validation(format!(
            "{} must be greater than zero, got {}",
            name, v
        )));
    }
    Ok(v)
}

/// Whole number ≥ 1.
pub fn parse_count(name: &str, raw: &str) -> AppResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(AppError::Validation(format!("{} must be at least 1", name))),
        Ok(v) => Ok(v),
        Err(_) => Err(AppError::Validation(format!(
            "{} must be a whole number, got '{}'",
            name,
            raw.trim()
        ))),
    }
}

fn parse_number(name: &str, raw: &str) -> AppResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            AppError::Validation(format!("{} must be a number, got '{}'", name, raw.trim()))
        })
}

fn require_text(name: &str, raw: &str) -> AppResult<String> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(AppError::Validation(format!("{} cannot be empty", name)));
    }
    Ok(s.to_string())
}

/// Match a category case-insensitively and return its configured spelling.
fn resolve_category(raw: &str, categories: &[String]) -> AppResult<String> {
    let wanted = raw.trim();
    categories
        .iter()
        .find(|c| c.eq_ignore_ascii_case(wanted))
        .cloned()
        .ok_or_else(|| {
            AppError::Validation(format!(
                "unknown meal category '{}'. Use one of: {}",
                wanted,
                categories.join(", ")
            ))
        })
}
