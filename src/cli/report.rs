//! CLI commands for reports
//!
//! The monthly summary with its category breakdown, and the year-wide
//! comparison of monthly totals.

use chrono::Month;

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::services::Tracker;
use crate::storage::KeyValueStore;

/// Handle `summary`
pub fn handle_summary<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    settings: &Settings,
    month: Option<Month>,
) -> ExpenseResult<()> {
    if let Some(month) = month {
        tracker.select_month(month);
    }

    let summary = tracker.state().summary();
    print!("{}", summary.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Handle `monthly`
pub fn handle_monthly<S: KeyValueStore>(
    tracker: &Tracker<S>,
    settings: &Settings,
) -> ExpenseResult<()> {
    let comparison = tracker.state().monthly_comparison();
    print!("{}", comparison.format_terminal(&settings.currency_symbol));
    Ok(())
}
