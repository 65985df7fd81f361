pub mod clock;
pub mod colors;
pub mod date;
pub mod formatting;
pub mod logging;
pub mod path;
pub mod table;

pub use formatting::fmt_number;
