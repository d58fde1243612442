//! Expense repository
//!
//! Mirrors the whole expense list to a key-value store under one key.
//! Loading never fails: a missing, malformed, or unreadable blob is logged
//! and treated as an empty list.

use log::{debug, warn};
use serde_json::Value;

use super::store::KeyValueStore;
use crate::error::ExpenseResult;
use crate::models::Expense;

/// Key under which the serialized list is stored
pub const STORAGE_KEY: &str = "expenses";

/// Loads and saves the expense list
pub struct ExpenseRepository<S> {
    store: S,
}

impl<S: KeyValueStore> ExpenseRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the persisted list, or an empty one if nothing usable is stored
    pub fn load(&self) -> Vec<Expense> {
        match self.try_load() {
            Ok(expenses) => expenses,
            Err(e) => {
                warn!("Error loading expenses: {}", e);
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> ExpenseResult<Vec<Expense>> {
        let Some(blob) = self.store.get(STORAGE_KEY)? else {
            debug!("No stored expenses under '{}'", STORAGE_KEY);
            return Ok(Vec::new());
        };

        let value: Value = serde_json::from_str(&blob)?;
        if !value.is_array() {
            warn!("Stored expenses are not a list, ignoring them");
            return Ok(Vec::new());
        }

        let expenses: Vec<Expense> = serde_json::from_value(value)?;
        debug!("Loaded {} expenses", expenses.len());
        Ok(expenses)
    }

    /// Overwrite the stored blob with the full list
    pub fn save(&mut self, expenses: &[Expense]) -> ExpenseResult<()> {
        let blob = serde_json::to_string(expenses)?;
        self.store.set(STORAGE_KEY, &blob)?;
        debug!("Saved {} expenses", expenses.len());
        Ok(())
    }

    /// Remove the stored blob entirely
    pub fn clear(&mut self) -> ExpenseResult<()> {
        self.store.remove(STORAGE_KEY)
    }
}
