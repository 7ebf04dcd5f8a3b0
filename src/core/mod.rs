//! Core business logic abstractions

pub mod config;
pub mod entry;
pub mod ledger;
pub mod log;
pub mod rates;
pub mod summary;

// Re-export main types for cleaner imports
pub use entry::{Category, Entry, Record};
pub use ledger::Ledger;
pub use rates::RateTable;
pub use summary::CategoryTotals;
