//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, filtering and the derived views consumed by the display and
//! export code.

pub mod expense;
pub mod totals;

pub use expense::{ExpenseStore, DEFAULT_STORAGE_KEY};
pub use totals::CategoryTotals;
