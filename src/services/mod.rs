//! Service layer for the expense tracker
//!
//! Business logic that ties state changes to persistence.

pub mod tracker;

pub use tracker::{ExpenseInput, Tracker};
