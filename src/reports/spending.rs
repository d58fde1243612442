//! Monthly Spending Summary
//!
//! Total spent in the selected month with a per-category breakdown, plus the
//! pie-chart data shaped from that breakdown.

use chrono::Month;

use super::totals::{category_totals, filter_by_month, sum_amounts, CategoryTotals};
use crate::display::report::{format_money, format_percentage, separator, truncate};
use crate::models::{month_name, Category, Expense};

/// Placeholder shown when there is nothing to chart
pub const NO_DATA: &str = "No data available";

/// One category row of the summary
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub total: f64,
    pub expense_count: usize,
    /// Share of the month's total, 0 when the total is not positive
    pub percentage: f64,
}

/// One pie-chart slice
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub color: &'static str,
}

/// Shape category totals into pie-chart slices, keeping their order
pub fn pie_slices(totals: &CategoryTotals) -> Vec<PieSlice> {
    totals
        .iter()
        .map(|t| PieSlice {
            name: t.category.clone(),
            value: t.total,
            color: Category::color_for(&t.category),
        })
        .collect()
}

/// Spending summary for one month
#[derive(Debug, Clone)]
pub struct SpendingSummary {
    pub month: Month,
    pub total: f64,
    pub expense_count: usize,
    /// Categories in order of first appearance
    pub categories: Vec<CategorySpending>,
    totals: CategoryTotals,
}

impl SpendingSummary {
    /// Summarize the expenses falling in `month`
    pub fn generate(expenses: &[Expense], month: Month) -> Self {
        let filtered = filter_by_month(expenses, month);
        let total = sum_amounts(&filtered);
        let totals = category_totals(&filtered);

        let categories = totals
            .iter()
            .map(|t| CategorySpending {
                category: t.category.clone(),
                total: t.total,
                expense_count: t.count,
                percentage: if total > 0.0 {
                    t.total / total * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        Self {
            month,
            total,
            expense_count: filtered.len(),
            categories,
            totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Raw per-category totals behind the rows
    pub fn category_totals(&self) -> &CategoryTotals {
        &self.totals
    }

    pub fn pie_slices(&self) -> Vec<PieSlice> {
        pie_slices(&self.totals)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Monthly Summary: {}\n", month_name(self.month)));
        output.push_str(&separator(56));
        output.push('\n');
        output.push_str(&format!(
            "Total Spent: {}\n",
            format_money(self.total, currency)
        ));
        output.push_str(&format!("Expenses:    {}\n\n", self.expense_count));

        if self.is_empty() {
            output.push_str(NO_DATA);
            output.push('\n');
            return output;
        }

        output.push_str(&format!(
            "{:<24} {:>14} {:>7} {:>7}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&separator(56));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:<24} {:>14} {:>7} {:>7}\n",
                truncate(&row.category, 24),
                format_money(row.total, currency),
                row.expense_count,
                format_percentage(row.percentage)
            ));
        }

        output
    }
}
