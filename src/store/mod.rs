pub mod audit;
pub mod codec;
pub mod goals;
pub mod log_store;

pub use goals::GoalsStore;
pub use log_store::{LoadReport, LogStore, SkippedRow};
