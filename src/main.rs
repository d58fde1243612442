use std::path::PathBuf;

use anyhow::Result;
use chrono::Month;
use clap::{Parser, Subcommand};
use env_logger::Env;

use expense_tracker::cli::{self, parse_month_arg};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::models::ExpenseId;
use expense_tracker::services::Tracker;
use expense_tracker::storage::open_file_repository;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Monthly expense tracker",
    long_about = "Record expenses by category, review them month by month, \
                  compare monthly totals, and export a month as CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g., "4.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (Grocery, Dining out, Transportation, Bills, Shopping, General)
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List a month's expenses
    #[command(alias = "ls")]
    List {
        /// Month name or number, defaults to the current month
        #[arg(short, long, value_parser = parse_month_arg)]
        month: Option<Month>,
    },

    /// Show one expense
    Show {
        /// Expense ID
        id: ExpenseId,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: ExpenseId,
    },

    /// Delete every expense
    Reset {
        /// Skip the confirmation notice
        #[arg(long)]
        yes: bool,
    },

    /// Total and per-category breakdown for a month
    Summary {
        /// Month name or number, defaults to the current month
        #[arg(short, long, value_parser = parse_month_arg)]
        month: Option<Month>,
    },

    /// Compare totals across all twelve months
    Monthly,

    /// Export a month's expenses to CSV
    Export {
        /// Month name or number, defaults to the current month
        #[arg(short, long, value_parser = parse_month_arg)]
        month: Option<Month>,
        /// Output file or directory (default: ./expenses-<Month>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the known categories
    Categories,

    /// Show current configuration and paths
    Config {
        /// Set the currency symbol used in listings and reports
        #[arg(long)]
        currency: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let mut settings = Settings::load_or_default(&paths)?;

    let repo = open_file_repository(&paths)?;
    let mut tracker = Tracker::open(repo);

    match cli.command {
        Some(Commands::Add {
            description,
            amount,
            category,
            date,
        }) => cli::handle_add(&mut tracker, &settings, description, amount, category, date)?,
        Some(Commands::List { month }) => cli::handle_list(&mut tracker, &settings, month)?,
        Some(Commands::Show { id }) => cli::handle_show(&tracker, &settings, id)?,
        Some(Commands::Delete { id }) => cli::handle_delete(&mut tracker, &settings, id)?,
        Some(Commands::Reset { yes }) => cli::handle_reset(&mut tracker, yes)?,
        Some(Commands::Summary { month }) => cli::handle_summary(&mut tracker, &settings, month)?,
        Some(Commands::Monthly) => cli::handle_monthly(&tracker, &settings)?,
        Some(Commands::Export { month, output }) => cli::handle_export(&mut tracker, month, output)?,
        Some(Commands::Categories) => cli::handle_categories()?,
        Some(Commands::Config { currency }) => cli::handle_config(&paths, &mut settings, currency)?,
        None => {
            println!("Expense Tracker - monthly expenses by category");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses add \"Coffee\" 4.50 -c \"Dining out\"' to record an expense.");
        }
    }

    Ok(())
}
