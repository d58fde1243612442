//! Monthly Totals Comparison
//!
//! Twelve monthly totals computed over every expense, regardless of which
//! month is selected. Each total doubles as a bar-chart datum.

use super::totals::{monthly_totals, MonthlyTotal};
use crate::display::report::{format_bar, format_money, separator};
use crate::models::Expense;

const BAR_WIDTH: usize = 30;

/// Year-wide comparison of monthly totals
#[derive(Debug, Clone)]
pub struct MonthlyComparison {
    /// January through December
    pub months: Vec<MonthlyTotal>,
}

impl MonthlyComparison {
    pub fn generate(expenses: &[Expense]) -> Self {
        Self {
            months: monthly_totals(expenses),
        }
    }

    /// Largest monthly total, or 0 when nothing was spent
    pub fn max_total(&self) -> f64 {
        self.months.iter().map(|m| m.total).fold(0.0, f64::max)
    }

    /// Format the comparison as a text bar chart
    pub fn format_terminal(&self, currency: &str) -> String {
        let max = self.max_total();
        let mut output = String::new();

        output.push_str("Monthly Totals Comparison\n");
        output.push_str(&separator(58));
        output.push('\n');

        for entry in &self.months {
            output.push_str(&format!(
                "{:<10} {} {:>14}\n",
                entry.name(),
                format_bar(entry.total, max, BAR_WIDTH),
                format_money(entry.total, currency)
            ));
        }

        output
    }
}
