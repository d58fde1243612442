//! Expense CLI commands
//!
//! Implements adding, listing, showing, deleting, and resetting expenses.

use chrono::Month;

use crate::config::Settings;
use crate::display::expense::{format_expense_details, format_expense_line, format_expense_table};
use crate::display::report::format_money;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{month::today, month_name, Category, ExpenseId};
use crate::services::{ExpenseInput, Tracker};
use crate::storage::KeyValueStore;

/// Map a category argument onto its canonical spelling when it names a known one
pub fn normalize_category(raw: &str) -> String {
    raw.parse::<Category>()
        .map(|c| c.as_str().to_string())
        .unwrap_or_else(|_| raw.trim().to_string())
}

/// Handle `add`
pub fn handle_add<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    settings: &Settings,
    description: String,
    amount: String,
    category: String,
    date: Option<String>,
) -> ExpenseResult<()> {
    let input = ExpenseInput {
        description,
        amount,
        category: normalize_category(&category),
        date: date.unwrap_or_else(today),
    };

    let expense = tracker.submit(&input)?;

    println!("Added: {}", format_expense_line(&expense, &settings.currency_symbol));
    println!("  Category: {}", expense.category);
    println!("  ID: {}", expense.id);
    Ok(())
}

/// Handle `list`
pub fn handle_list<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    settings: &Settings,
    month: Option<Month>,
) -> ExpenseResult<()> {
    if let Some(month) = month {
        tracker.select_month(month);
    }

    let state = tracker.state();
    let expenses = state.expenses_for_month();

    println!("Expenses: {}", month_name(state.selected_month()));
    print!("{}", format_expense_table(&expenses, &settings.currency_symbol));
    if !expenses.is_empty() {
        println!(
            "Total Spent: {}",
            format_money(state.total_for_month(), &settings.currency_symbol)
        );
    }
    Ok(())
}

/// Handle `show`
pub fn handle_show<S: KeyValueStore>(
    tracker: &Tracker<S>,
    settings: &Settings,
    id: ExpenseId,
) -> ExpenseResult<()> {
    let expense = tracker
        .state()
        .find(id)
        .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

    print!("{}", format_expense_details(expense, &settings.currency_symbol));
    Ok(())
}

/// Handle `delete`
pub fn handle_delete<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    settings: &Settings,
    id: ExpenseId,
) -> ExpenseResult<()> {
    let expense = tracker
        .state()
        .find(id)
        .cloned()
        .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

    tracker.delete(id)?;
    println!("Deleted: {}", format_expense_line(&expense, &settings.currency_symbol));
    Ok(())
}

/// Handle `reset`
pub fn handle_reset<S: KeyValueStore>(tracker: &mut Tracker<S>, yes: bool) -> ExpenseResult<()> {
    let count = tracker.state().expenses().len();

    if !yes {
        println!(
            "This will permanently delete all {} expenses. Re-run with --yes to confirm.",
            count
        );
        return Ok(());
    }

    tracker.reset()?;
    println!("Deleted all {} expenses.", count);
    Ok(())
}

/// Handle `categories`
pub fn handle_categories() -> ExpenseResult<()> {
    println!("Categories:");
    for category in Category::ALL {
        println!("  {:<16} {}", category.as_str(), category.color());
    }
    Ok(())
}
