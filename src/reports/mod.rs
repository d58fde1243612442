//! Reports module for the expense tracker
//!
//! Pure derivations over the expense list: month filtering, sums, category
//! and monthly totals, and the summary reports built from them.

pub mod monthly;
pub mod spending;
pub mod totals;

pub use monthly::MonthlyComparison;
pub use spending::{pie_slices, CategorySpending, PieSlice, SpendingSummary, NO_DATA};
pub use totals::{
    category_totals, filter_by_month, format_amount, monthly_totals, sum_amounts, CategoryTotal,
    CategoryTotals, MonthlyTotal,
};
