//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod expense;
pub mod export;
pub mod report;

pub use config::handle_config;
pub use expense::{
    handle_add, handle_categories, handle_delete, handle_list, handle_reset, handle_show,
};
pub use export::handle_export;
pub use report::{handle_monthly, handle_summary};

use chrono::Month;

use crate::models::parse_month;

/// clap value parser for `--month`
pub fn parse_month_arg(input: &str) -> Result<Month, String> {
    parse_month(input).map_err(|e| e.to_string())
}
