//! Core data models for the expense tracker
//!
//! The expense record itself plus the small vocabularies around it: ids,
//! the known category set, and month naming.

pub mod category;
pub mod expense;
pub mod ids;
pub mod month;

pub use category::Category;
pub use expense::Expense;
pub use ids::ExpenseId;
pub use month::{current_month, month_name, month_of, parse_month, MONTHS};

/// Re-exported so callers don't need a direct chrono import for month values
pub use chrono::Month;
