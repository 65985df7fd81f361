//! Period aggregation over a record log.

use crate::models::Record;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// One aggregated bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket<K> {
    pub key: K,
    /// Earliest record timestamp that fell in the bucket.
    pub first_seen: NaiveDateTime,
    pub total: f64,
    pub count: usize,
}

/// Group `records` with `period_fn` and sum `field` per bucket.
///
/// Records without a numeric `field` do not contribute. Buckets come out in
/// ascending order of their earliest record (ties by key), and each total is
/// summed over sorted values, so any permutation of `records` gives the same
/// result.
pub fn aggregate_by_period<'a, K, I, F>(records: I, period_fn: F, field: &str) -> Vec<Bucket<K>>
where
    I: IntoIterator<Item = &'a Record>,
    F: Fn(&Record) -> K,
    K: Eq + Hash + Ord + Clone,
{
    let mut groups: HashMap<K, (NaiveDateTime, Vec<f64>)> = HashMap::new();

    for r in records {
        let Some(value) = r.number(field) else {
            continue;
        };
        let key = period_fn(r);
        let slot = groups
            .entry(key)
            .or_insert_with(|| (r.timestamp, Vec::new()));
        slot.0 = slot.0.min(r.timestamp);
        slot.1.push(value);
    }

    let mut buckets: Vec<Bucket<K>> = groups
        .into_iter()
        .map(|(key, (first_seen, mut values))| {
            values.sort_by(f64::total_cmp);
            Bucket {
                key,
                first_seen,
                total: values.iter().sum(),
                count: values.len(),
            }
        })
        .collect();

    buckets.sort_by(|a, b| a.first_seen.cmp(&b.first_seen).then_with(|| a.key.cmp(&b.key)));
    buckets
}

/// Shortcut for the standard calendar periods.
pub fn aggregate_by<'a, I>(records: I, period: Period, field: &str) -> Vec<Bucket<PeriodKey>>
where
    I: IntoIterator<Item = &'a Record>,
{
    aggregate_by_period(records, |r| period.key(r.timestamp), field)
}

/// Sum of `field` over the records of one calendar day.
pub fn day_total<'a, I>(records: I, day: NaiveDate, field: &str) -> f64
where
    I: IntoIterator<Item = &'a Record>,
{
    aggregate_by(records, Period::Day, field)
        .into_iter()
        .find(|b| b.key == PeriodKey::Day(day))
        .map(|b| b.total)
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    pub fn key(&self, ts: NaiveDateTime) -> PeriodKey {
        let d = ts.date();
        match self {
            Period::Day => PeriodKey::Day(d),
            Period::Week => {
                let w = d.iso_week();
                PeriodKey::Week {
                    year: w.year(),
                    week: w.week(),
                }
            }
            Period::Month => PeriodKey::Month {
                year: d.year(),
                month: d.month(),
            },
        }
    }
}

/// Bucket key for [`Period`]. Ordering is chronological within one period type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PeriodKey {
    Day(NaiveDate),
    Week { year: i32, week: u32 },
    Month { year: i32, month: u32 },
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodKey::Day(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            PeriodKey::Week { year, week } => write!(f, "{}-W{:02}", year, week),
            PeriodKey::Month { year, month } => write!(f, "{}-{:02}", year, month),
        }
    }
}
