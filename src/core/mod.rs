//! Core amortization and scheduling logic

pub mod amortize;
pub mod config;
pub mod error;
pub mod liability;
pub mod log;
pub mod schedule;

// Re-export main types for cleaner imports
pub use error::LiabilityError;
pub use liability::Liability;
pub use schedule::{AggregatedPoint, ExpenseEntry, ExpenseSchedule, MonthlyBuckets};
