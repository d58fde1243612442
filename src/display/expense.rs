//! Expense display formatting
//!
//! Renders expense lists as terminal tables.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::report::{format_money, truncate};
use crate::models::Expense;

/// Placeholder shown for an empty list
pub const NO_EXPENSES: &str = "No expenses yet";

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return format!("{}\n", NO_EXPENSES);
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: e.date.clone(),
        description: truncate(&e.description, 40),
        category: e.category.clone(),
        amount: format_money(e.amount, currency),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));

    format!("{}\n", table)
}

/// One-line description of an expense
pub fn format_expense_line(expense: &Expense, currency: &str) -> String {
    format!(
        "{} — {} on {}",
        expense.description,
        format_money(expense.amount, currency),
        expense.date
    )
}

/// Multi-line details of a single expense
pub fn format_expense_details(expense: &Expense, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!("Amount:      {}\n", format_money(expense.amount, currency)));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Date:        {}\n", expense.date));
    output
}
