//! Filtering and aggregation over the expense list
//!
//! All functions are pure. Month membership is derived from each expense's
//! date string at query time; an unparseable date belongs to no month.

use chrono::Month;

use crate::models::{month_name, Expense, MONTHS};

/// Expenses whose date falls in `month`, in list order
pub fn filter_by_month(expenses: &[Expense], month: Month) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| e.month() == Some(month))
        .cloned()
        .collect()
}

/// Arithmetic sum of amounts, unrounded
pub fn sum_amounts(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Two-decimal display form of an amount; negative zero shows as `0.00`
pub fn format_amount(amount: f64) -> String {
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("{:.2}", amount)
}

/// Total spent in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    /// Number of expenses contributing to the total
    pub count: usize,
}

/// Per-category totals in order of first appearance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
}

impl CategoryTotals {
    fn add(&mut self, category: &str, amount: f64) {
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => {
                entry.total += amount;
                entry.count += 1;
            }
            None => self.entries.push(CategoryTotal {
                category: category.to_string(),
                total: amount,
                count: 1,
            }),
        }
    }

    /// Total for a category, if it appeared at all
    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.total)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum across all categories
    pub fn grand_total(&self) -> f64 {
        self.entries.iter().map(|e| e.total).sum()
    }
}

impl<'a> IntoIterator for &'a CategoryTotals {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Accumulate amounts per category, preserving first-seen order
pub fn category_totals(expenses: &[Expense]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for expense in expenses {
        totals.add(&expense.category, expense.amount);
    }
    totals
}

/// Total spent in one calendar month; also the bar-chart datum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTotal {
    pub month: Month,
    pub total: f64,
}

impl MonthlyTotal {
    pub fn name(&self) -> &'static str {
        month_name(self.month)
    }
}

/// Totals for all twelve months, January first, over the whole list
pub fn monthly_totals(expenses: &[Expense]) -> Vec<MonthlyTotal> {
    let mut sums = [0.0_f64; 12];
    for expense in expenses {
        if let Some(month) = expense.month() {
            sums[month.number_from_month() as usize - 1] += expense.amount;
        }
    }

    MONTHS
        .iter()
        .zip(sums)
        .map(|(&month, total)| MonthlyTotal { month, total })
        .collect()
}
