//! Storage layer for the expense tracker
//!
//! The expense list is persisted as a single JSON string under one key of a
//! key-value backend. Two backends are provided: an in-memory map and a
//! directory of JSON files written atomically.

pub mod file;
pub mod file_io;
pub mod memory;

pub use file::FileStore;
pub use file_io::{read_optional, write_atomic};
pub use memory::MemoryStore;

use crate::error::ExpenseResult;

/// Persistent string key-value storage
pub trait KeyValueStore {
    /// Fetch the value stored under `key`, if any
    fn get(&self, key: &str) -> ExpenseResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()>;
}
