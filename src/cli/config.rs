//! CLI command for showing and changing settings

use crate::config::{ExpensePaths, Settings};
use crate::error::{ExpenseError, ExpenseResult};

/// Handle `config`; a new currency symbol is saved before printing
pub fn handle_config(
    paths: &ExpensePaths,
    settings: &mut Settings,
    currency: Option<String>,
) -> ExpenseResult<()> {
    if let Some(symbol) = currency {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(ExpenseError::Validation(
                "Currency symbol must not be empty".into(),
            ));
        }
        settings.currency_symbol = symbol.to_string();
        settings.save(paths)?;
        println!("Currency symbol set to {}", settings.currency_symbol);
        println!();
    }

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data directory: {}", paths.data_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Schema version:  {}", settings.schema_version);

    Ok(())
}
