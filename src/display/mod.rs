//! Display formatting for terminal output
//!
//! Renders the store's derived views: the expense list, the balance
//! readout, the category breakdown chart and the month selector.

pub mod expense;
pub mod format;
pub mod summary;

pub use expense::{format_expense_details, format_expense_table};
pub use summary::{format_balance, format_category_breakdown, format_month_selector};
