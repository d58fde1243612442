//! CSV Export functionality
//!
//! Serializes a month's expenses as CSV. Description and category are always
//! double-quoted; amount and date are written as stored.

use std::io::Write;

use chrono::Month;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{month_name, Expense};

/// Header row of every export
pub const CSV_HEADER: &str = "Description,Amount,Category,Date";

/// MIME type offered alongside the exported file
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// A ready-to-save export
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
    rows: usize,
}

impl CsvExport {
    /// Build the export for a month's already-filtered expenses
    pub fn new(month: Month, expenses: &[Expense]) -> Self {
        Self {
            filename: export_filename(month),
            mime_type: CSV_MIME_TYPE,
            content: to_csv(expenses),
            rows: expenses.len(),
        }
    }

    /// Number of data rows in the export
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Write the export content to a writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> ExpenseResult<()> {
        write_content(&self.content, writer)
    }
}

/// File name for a month's export, e.g. `expenses-March.csv`
pub fn export_filename(month: Month) -> String {
    format!("expenses-{}.csv", month_name(month))
}

/// Serialize expenses to CSV text
///
/// Rows are joined by `\n` with no trailing newline; an empty list yields
/// the header alone.
pub fn to_csv(expenses: &[Expense]) -> String {
    let mut csv = String::from(CSV_HEADER);
    for expense in expenses {
        csv.push('\n');
        csv.push_str(&format_row(expense));
    }
    csv
}

/// Write the CSV text for `expenses` to a writer
pub fn write_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    write_content(&to_csv(expenses), writer)
}

fn write_content<W: Write>(content: &str, writer: &mut W) -> ExpenseResult<()> {
    writer
        .write_all(content.as_bytes())
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

fn format_row(expense: &Expense) -> String {
    format!(
        "{},{},{},{}",
        quote(&expense.description),
        plain_amount(expense.amount),
        quote(&expense.category),
        expense.date
    )
}

/// Negative zero is written as `0`
fn plain_amount(amount: f64) -> f64 {
    if amount == 0.0 {
        0.0
    } else {
        amount
    }
}

/// Wrap a field in double quotes, doubling any embedded quote
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
