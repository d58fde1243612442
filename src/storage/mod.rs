//! Storage layer for the expense tracker
//!
//! A small key-value abstraction with file and in-memory backends, and the
//! repository that mirrors the expense list into it.

pub mod expenses;
pub mod file_io;
pub mod store;

pub use expenses::{ExpenseRepository, STORAGE_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Open the file-backed repository under the configured data directory
pub fn open_file_repository(
    paths: &ExpensePaths,
) -> Result<ExpenseRepository<FileStore>, ExpenseError> {
    paths.ensure_directories()?;
    Ok(ExpenseRepository::new(FileStore::new(paths.data_dir())))
}
