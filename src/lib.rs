//! Expense Tracker - monthly personal expense tracking
//!
//! Record expenses with a description, amount, category, and date; review
//! them month by month; compare monthly totals; export a month as CSV.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The expense record, ids, categories, month naming
//! - `storage`: Key-value stores and the expense repository
//! - `reports`: Filtering and aggregation over the expense list
//! - `export`: CSV export
//! - `app`: Application state (expense list + selected month)
//! - `services`: State changes mirrored to storage
//! - `display`, `cli`: Terminal presentation
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::models::Month;
//! use expense_tracker::services::{ExpenseInput, Tracker};
//! use expense_tracker::storage::{ExpenseRepository, MemoryStore};
//!
//! let mut tracker = Tracker::open(ExpenseRepository::new(MemoryStore::new()));
//! tracker.select_month(Month::March);
//! tracker
//!     .submit(&ExpenseInput {
//!         description: "Coffee".into(),
//!         amount: "4.5".into(),
//!         category: "Dining out".into(),
//!         date: "2024-03-05".into(),
//!     })
//!     .unwrap();
//!
//! assert_eq!(tracker.state().category_totals().get("Dining out"), Some(4.5));
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use app::AppState;
pub use error::{ExpenseError, ExpenseResult};
