//! Expense model
//!
//! An expense is immutable once created. Construction validates the raw form
//! fields; inserting into the list and persisting are the caller's job.

use chrono::Month;
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::month::{month_of, parse_date};
use crate::error::{ExpenseError, ExpenseResult};

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Creation timestamp in epoch milliseconds
    pub id: ExpenseId,

    pub description: String,

    /// Amount as entered, with no rounding
    pub amount: f64,

    /// Category text; normally one of [`super::Category::ALL`]
    pub category: String,

    /// Date in `YYYY-MM-DD` form, stored as entered
    pub date: String,
}

impl Expense {
    /// Build an expense from raw form fields, stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns [`ExpenseError::Validation`] if any field is blank, the amount
    /// is not a finite number, or the date is not `YYYY-MM-DD`.
    pub fn create(
        description: &str,
        amount_text: &str,
        category: &str,
        date_text: &str,
    ) -> ExpenseResult<Self> {
        Self::with_id(ExpenseId::now(), description, amount_text, category, date_text)
    }

    /// Build an expense with an explicit id
    pub fn with_id(
        id: ExpenseId,
        description: &str,
        amount_text: &str,
        category: &str,
        date_text: &str,
    ) -> ExpenseResult<Self> {
        let description = required("Description", description)?;
        let amount_text = required("Amount", amount_text)?;
        let category = required("Category", category)?;
        let date = required("Date", date_text)?;

        let amount = parse_amount(amount_text)?;

        if parse_date(date).is_none() {
            return Err(ExpenseError::Validation(format!(
                "Date must be in YYYY-MM-DD form, got '{}'",
                date
            )));
        }

        Ok(Self {
            id,
            description: description.to_string(),
            amount,
            category: category.to_string(),
            date: date.to_string(),
        })
    }

    /// Calendar month of this expense, derived from its date
    pub fn month(&self) -> Option<Month> {
        month_of(&self.date)
    }
}

fn required<'a>(field: &str, value: &'a str) -> ExpenseResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ExpenseError::missing_field(field))
    } else {
        Ok(trimmed)
    }
}

/// Parse amount text into a finite float
pub fn parse_amount(text: &str) -> ExpenseResult<f64> {
    let amount: f64 = text
        .trim()
        .parse()
        .map_err(|_| ExpenseError::Validation(format!("Invalid amount: '{}'", text)))?;

    if !amount.is_finite() {
        return Err(ExpenseError::Validation(format!(
            "Amount must be a finite number, got '{}'",
            text
        )));
    }

    Ok(amount)
}
