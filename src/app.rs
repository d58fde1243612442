//! Application state
//!
//! The expense list and the selected month, held in one value owned by the
//! presentation layer. Every handler here is synchronous and leaves
//! persistence to the caller.

use chrono::Month;

use crate::export::CsvExport;
use crate::models::{current_month, Expense, ExpenseId};
use crate::reports::{
    category_totals, filter_by_month, sum_amounts, CategoryTotals, MonthlyComparison,
    SpendingSummary,
};

#[derive(Debug, Clone)]
pub struct AppState {
    /// Most recent first
    expenses: Vec<Expense>,
    selected_month: Month,
}

impl AppState {
    /// State over a loaded list, with the current month selected
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self::with_month(expenses, current_month())
    }

    pub fn with_month(expenses: Vec<Expense>, selected_month: Month) -> Self {
        Self {
            expenses,
            selected_month,
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn selected_month(&self) -> Month {
        self.selected_month
    }

    pub fn select_month(&mut self, month: Month) {
        self.selected_month = month;
    }

    pub fn find(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Prepend an expense and return the id it was stored under
    ///
    /// An id already present in the list is replaced by one past the
    /// largest id, so ids stay unique when two expenses share a millisecond.
    /// When the largest id is `i64::MAX`, the highest free id below it is used.
    pub fn add(&mut self, mut expense: Expense) -> ExpenseId {
        if self.find(expense.id).is_some() {
            expense.id = self.unused_id().unwrap_or(expense.id);
        }

        let id = expense.id;
        self.expenses.insert(0, expense);
        id
    }

    fn unused_id(&self) -> Option<ExpenseId> {
        let max = self.expenses.iter().map(|e| e.id).max()?;
        max.next().or_else(|| {
            (0..i64::MAX)
                .rev()
                .map(ExpenseId::from_millis)
                .find(|id| self.find(*id).is_none())
        })
    }

    /// Remove the expense with `id`; returns whether one was removed
    pub fn delete(&mut self, id: ExpenseId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.expenses.len() != before
    }

    /// Drop every expense
    pub fn reset(&mut self) {
        self.expenses.clear();
    }

    /// Expenses in the selected month
    pub fn expenses_for_month(&self) -> Vec<Expense> {
        filter_by_month(&self.expenses, self.selected_month)
    }

    pub fn total_for_month(&self) -> f64 {
        sum_amounts(&self.expenses_for_month())
    }

    pub fn category_totals(&self) -> CategoryTotals {
        category_totals(&self.expenses_for_month())
    }

    pub fn summary(&self) -> SpendingSummary {
        SpendingSummary::generate(&self.expenses, self.selected_month)
    }

    /// Year-wide comparison; ignores the selected month
    pub fn monthly_comparison(&self) -> MonthlyComparison {
        MonthlyComparison::generate(&self.expenses)
    }

    /// CSV export of the selected month
    pub fn export(&self) -> CsvExport {
        CsvExport::new(self.selected_month, &self.expenses_for_month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, description: &str, amount: &str, category: &str, date: &str) -> Expense {
        Expense::with_id(ExpenseId::from_millis(id), description, amount, category, date).unwrap()
    }

    fn ids(state: &AppState) -> Vec<i64> {
        state.expenses().iter().map(|e| e.id.as_millis()).collect()
    }

    fn march_state() -> AppState {
        let mut state = AppState::with_month(Vec::new(), Month::March);
        state.add(expense(1, "Rent", "1200", "Bills", "2024-02-01"));
        state.add(expense(2, "Coffee", "4.5", "Dining out", "2024-03-05"));
        state.add(expense(3, "Groceries", "30", "Grocery", "2024-03-09"));
        state
    }

    #[test]
    fn test_add_prepends() {
        let state = march_state();
        assert_eq!(ids(&state), vec![3, 2, 1]);
    }

    #[test]
    fn test_add_resolves_id_collision() {
        let mut state = march_state();
        let id = state.add(expense(2, "Tea", "3", "Dining out", "2024-03-06"));

        assert_eq!(id, ExpenseId::from_millis(4));
        assert_eq!(ids(&state), vec![4, 3, 2, 1]);
        assert_eq!(state.find(id).unwrap().description, "Tea");
    }

    #[test]
    fn test_id_collision_at_max_id() {
        let mut state = AppState::with_month(Vec::new(), Month::March);
        state.add(expense(i64::MAX, "Rent", "1200", "Bills", "2024-03-01"));

        let id = state.add(expense(i64::MAX, "Tea", "3", "Dining out", "2024-03-06"));

        assert_eq!(id, ExpenseId::from_millis(i64::MAX - 1));
        assert_eq!(ids(&state), vec![i64::MAX - 1, i64::MAX]);
    }

    #[test]
    fn test_delete_existing_preserves_order() {
        let mut state = march_state();
        assert!(state.delete(ExpenseId::from_millis(2)));
        assert_eq!(ids(&state), vec![3, 1]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut state = march_state();
        assert!(!state.delete(ExpenseId::from_millis(99)));
        assert_eq!(ids(&state), vec![3, 2, 1]);
    }

    #[test]
    fn test_reset() {
        let mut state = march_state();
        state.reset();
        assert!(state.expenses().is_empty());
        assert_eq!(state.export().content, "Description,Amount,Category,Date");
    }

    #[test]
    fn test_month_views_follow_selection() {
        let mut state = march_state();
        assert_eq!(state.expenses_for_month().len(), 2);
        assert_eq!(state.total_for_month(), 34.5);
        assert_eq!(state.category_totals().len(), 2);

        state.select_month(Month::February);
        assert_eq!(state.selected_month(), Month::February);
        assert_eq!(state.total_for_month(), 1200.0);
        assert_eq!(state.summary().month, Month::February);
    }

    #[test]
    fn test_monthly_comparison_ignores_selection() {
        let mut state = march_state();
        state.select_month(Month::July);
        let comparison = state.monthly_comparison();
        assert_eq!(comparison.months[1].total, 1200.0);
        assert_eq!(comparison.months[2].total, 34.5);
    }

    #[test]
    fn test_export_selected_month() {
        let state = march_state();
        let export = state.export();
        assert_eq!(export.filename, "expenses-March.csv");
        assert_eq!(
            export.content,
            "Description,Amount,Category,Date\n\
             \"Groceries\",30,\"Grocery\",2024-03-09\n\
             \"Coffee\",4.5,\"Dining out\",2024-03-05"
        );
    }

    #[test]
    fn test_new_selects_current_month() {
        let state = AppState::new(Vec::new());
        assert_eq!(state.selected_month(), current_month());
    }
}
