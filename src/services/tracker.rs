//! Expense tracker service
//!
//! Couples the application state with the repository so that every mutation
//! is immediately mirrored to storage.

use chrono::Month;
use log::{info, warn};

use crate::app::AppState;
use crate::error::ExpenseResult;
use crate::models::{Category, Expense, ExpenseId};
use crate::storage::{ExpenseRepository, KeyValueStore};

/// Raw form fields for a new expense
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

/// Service for recording and removing expenses
pub struct Tracker<S> {
    repo: ExpenseRepository<S>,
    state: AppState,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Load the persisted list and select the current month
    pub fn open(repo: ExpenseRepository<S>) -> Self {
        let state = AppState::new(repo.load());
        Self { repo, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn repository(&self) -> &ExpenseRepository<S> {
        &self.repo
    }

    pub fn select_month(&mut self, month: Month) {
        self.state.select_month(month);
    }

    /// Validate form input, record the expense, and save
    ///
    /// Nothing is stored when validation fails.
    pub fn submit(&mut self, input: &ExpenseInput) -> ExpenseResult<Expense> {
        let expense = Expense::create(
            &input.description,
            &input.amount,
            &input.category,
            &input.date,
        )?;

        if !Category::is_known(&expense.category) {
            warn!("Category '{}' is not one of the known categories", expense.category);
        }

        let id = self.add(expense.clone())?;
        Ok(Expense { id, ..expense })
    }

    /// Record an already-built expense and save
    ///
    /// The state is left untouched if the save fails.
    pub fn add(&mut self, expense: Expense) -> ExpenseResult<ExpenseId> {
        let mut next = self.state.clone();
        let id = next.add(expense);
        self.commit(next)?;
        info!("Added expense {}", id);
        Ok(id)
    }

    /// Remove an expense by id and save; returns whether one was removed
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<bool> {
        let mut next = self.state.clone();
        let removed = next.delete(id);
        self.commit(next)?;
        if removed {
            info!("Deleted expense {}", id);
        }
        Ok(removed)
    }

    fn commit(&mut self, next: AppState) -> ExpenseResult<()> {
        self.repo.save(next.expenses())?;
        self.state = next;
        Ok(())
    }

    /// Remove every expense and purge the stored copy
    pub fn reset(&mut self) -> ExpenseResult<()> {
        self.repo.clear()?;
        self.state.reset();
        info!("Reset all expenses");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;
    use crate::storage::{MemoryStore, STORAGE_KEY};

    /// Store that serves reads from memory and refuses every write
    #[derive(Default)]
    struct ReadOnlyStore {
        inner: MemoryStore,
    }

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> ExpenseResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> ExpenseResult<()> {
            Err(ExpenseError::Storage("disk full".into()))
        }

        fn remove(&mut self, _key: &str) -> ExpenseResult<()> {
            Err(ExpenseError::Storage("disk full".into()))
        }
    }

    fn input(description: &str, amount: &str, category: &str, date: &str) -> ExpenseInput {
        ExpenseInput {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    fn open_empty() -> Tracker<MemoryStore> {
        Tracker::open(ExpenseRepository::new(MemoryStore::new()))
    }

    #[test]
    fn test_submit_persists() {
        let mut tracker = open_empty();
        let expense = tracker
            .submit(&input("Coffee", "4.5", "Dining out", "2024-03-05"))
            .unwrap();

        assert_eq!(tracker.state().expenses(), &[expense.clone()]);
        assert_eq!(tracker.repository().load(), vec![expense]);
    }

    #[test]
    fn test_invalid_submit_stores_nothing() {
        let mut tracker = open_empty();
        let err = tracker
            .submit(&input("Coffee", "", "Dining out", "2024-03-05"))
            .unwrap_err();

        assert!(err.is_validation());
        assert!(tracker.state().expenses().is_empty());
        assert!(!tracker.repository().store().contains(STORAGE_KEY));
    }

    #[test]
    fn test_rapid_submits_get_unique_ids() {
        let mut tracker = open_empty();
        let mut seen = Vec::new();
        for i in 0..20 {
            let e = tracker
                .submit(&input("Item", &i.to_string(), "General", "2024-03-05"))
                .unwrap();
            assert!(!seen.contains(&e.id));
            seen.push(e.id);
        }
        assert_eq!(tracker.repository().load().len(), 20);
    }

    #[test]
    fn test_delete_persists() {
        let mut tracker = open_empty();
        let first = tracker.submit(&input("A", "1", "General", "2024-03-01")).unwrap();
        let second = tracker.submit(&input("B", "2", "General", "2024-03-02")).unwrap();

        assert!(tracker.delete(first.id).unwrap());
        assert_eq!(tracker.repository().load(), vec![second.clone()]);

        assert!(!tracker.delete(first.id).unwrap());
        assert_eq!(tracker.repository().load(), vec![second]);
    }

    #[test]
    fn test_reset_purges_store() {
        let mut tracker = open_empty();
        tracker.submit(&input("A", "1", "General", "2024-03-01")).unwrap();

        tracker.reset().unwrap();

        assert!(tracker.state().expenses().is_empty());
        assert!(!tracker.repository().store().contains(STORAGE_KEY));
    }

    #[test]
    fn test_open_loads_existing() {
        let mut tracker = open_empty();
        tracker.submit(&input("A", "1", "General", "2024-03-01")).unwrap();
        let store = tracker.repository().store().clone();

        let reopened = Tracker::open(ExpenseRepository::new(store));
        assert_eq!(reopened.state().expenses().len(), 1);
    }

    #[test]
    fn test_select_month() {
        let mut tracker = open_empty();
        tracker.submit(&input("A", "1", "General", "2024-03-01")).unwrap();

        tracker.select_month(Month::March);
        assert_eq!(tracker.state().expenses_for_month().len(), 1);
        tracker.select_month(Month::April);
        assert!(tracker.state().expenses_for_month().is_empty());
    }

    #[test]
    fn test_failed_save_leaves_state_unchanged() {
        let mut tracker = Tracker::open(ExpenseRepository::new(ReadOnlyStore::default()));

        let err = tracker
            .submit(&input("Coffee", "4.5", "Dining out", "2024-03-05"))
            .unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
        assert!(tracker.state().expenses().is_empty());
    }

    #[test]
    fn test_failed_delete_keeps_expense() {
        let mut repo = ExpenseRepository::new(MemoryStore::new());
        let expense = Expense::with_id(
            ExpenseId::from_millis(1),
            "Coffee",
            "4.5",
            "Dining out",
            "2024-03-05",
        )
        .unwrap();
        repo.save(&[expense.clone()]).unwrap();
        let store = repo.store().clone();

        let mut tracker = Tracker::open(ExpenseRepository::new(ReadOnlyStore { inner: store }));
        assert!(tracker.delete(expense.id).is_err());
        assert_eq!(tracker.state().expenses(), &[expense]);
    }
}
