//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: the
//! expense record itself, its money amount, category label and the
//! year-month key used for filtering.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use category::Category;
pub use expense::{Expense, ExpenseValidationError, NewExpense, DATE_FORMAT};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use month::Month;
