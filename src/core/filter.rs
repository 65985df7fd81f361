//! Record filters used by `list`, `stats`, `progress` and `export`.

use crate::models::Record;
use chrono::{NaiveDate, NaiveDateTime};

/// Lazy iterator over the records whose `field` matches `value`.
///
/// Finite and restartable: clone it (or call [`filter_by_field`] again) to
/// iterate a second time. Filters chain, since the source can be any
/// iterator of records.
#[derive(Debug, Clone)]
pub struct FieldFilter<I> {
    inner: I,
    field: String,
    value: String,
}

impl<'a, I> Iterator for FieldFilter<I>
where
    I: Iterator<Item = &'a Record>,
{
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let field = &self.field;
        let value = &self.value;
        self.inner
            .by_ref()
            .find(|r| r.field(field).is_some_and(|v| v.matches(value)))
    }
}

/// Text fields compare trimmed and case-insensitively ("squat" == " Squat ").
pub fn filter_by_field<'a, I>(records: I, field: &str, value: &str) -> FieldFilter<I::IntoIter>
where
    I: IntoIterator<Item = &'a Record>,
{
    FieldFilter {
        inner: records.into_iter(),
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// Records whose date lies in `[start, end]`; a missing bound is open.
pub fn filter_by_date_range<'a, I>(
    records: I,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> impl Iterator<Item = &'a Record> + Clone
where
    I: IntoIterator<Item = &'a Record>,
    I::IntoIter: Clone,
{
    records.into_iter().filter(move |r| {
        let d = r.date();
        start.is_none_or(|s| d >= s) && end.is_none_or(|e| d <= e)
    })
}

/// One point of a weight progression.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressPoint {
    pub timestamp: NaiveDateTime,
    pub exercise: String,
    pub weight: f64,
}

/// Weight of every set of `exercise` (every exercise when `None`), oldest first.
pub fn progress_series(records: &[Record], exercise: Option<&str>) -> Vec<ProgressPoint> {
    let sets: Vec<&Record> = match exercise {
        Some(x) => filter_by_field(records, "exercise", x).collect(),
        None => records.iter().collect(),
    };

    let mut series: Vec<ProgressPoint> = sets
        .into_iter()
        .filter_map(|r| {
            let w = r.entry.as_workout()?;
            Some(ProgressPoint {
                timestamp: r.timestamp,
                exercise: w.exercise.clone(),
                weight: w.weight,
            })
        })
        .collect();
    series.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    series
}
