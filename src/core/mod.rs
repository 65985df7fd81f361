pub mod add;
pub mod aggregate;
pub mod backup;
pub mod filter;
pub mod input;
pub mod log;
pub mod nutrition;

pub use aggregate::{Bucket, Period, PeriodKey, aggregate_by, aggregate_by_period, day_total};
pub use filter::{
    FieldFilter, ProgressPoint, filter_by_date_range, filter_by_field, progress_series,
};
pub use nutrition::NutritionProgress;
