//! Expense Tracker - personal expense tracking library
//!
//! Records expenses (description, amount, category, date), keeps them in a
//! persistent key-value store, and derives the views a front end needs: the
//! month-filtered list, the running balance, per-category totals and the
//! list of months with activity.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense record, money, category and month types
//! - `storage`: Key-value backends (in-memory and JSON files)
//! - `services`: The `ExpenseStore` and its derived views
//! - `audit`: Append-only audit log of adds and deletes
//! - `display`: Terminal rendering of the derived views
//! - `export`: Report export (text, CSV, JSON, YAML)
//! - `cli`: Command handlers for the `expense` binary
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::models::{Money, NewExpense};
//! use expense_tracker::services::ExpenseStore;
//! use expense_tracker::storage::MemoryStore;
//!
//! let mut store = ExpenseStore::open(MemoryStore::new(), "expense")?;
//! store.add(&NewExpense::new("Coffee", "3.50", "Food", "2024-05-01"))?;
//! assert_eq!(store.balance(), Money::from_cents(-350));
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
