pub mod entry;
pub mod field;
pub mod goals;
pub mod kind;
pub mod record;

pub use entry::{Entry, Meal, Sleep, Water, Workout};
pub use field::FieldValue;
pub use goals::Goals;
pub use kind::RecordKind;
pub use record::Record;
