//! Display formatting for terminal output
//!
//! Provides formatters for expenses and report helpers.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_line, format_expense_table, NO_EXPENSES};
pub use report::{format_bar, format_money, format_percentage, separator, truncate};
