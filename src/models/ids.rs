//! Expense identifiers
//!
//! Ids are millisecond timestamps taken at creation time. They serialize as
//! plain JSON numbers so the persisted list stays readable by older data.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Wrap a raw id value
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Generate a fresh id from the wall clock
    ///
    /// The result is strictly greater than `last`, so ids stay unique even
    /// when several expenses are created within the same millisecond.
    pub fn generate(last: Option<ExpenseId>) -> Self {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        match last {
            Some(prev) if prev.0 >= now => Self(prev.0.saturating_add(1)),
            _ => Self(now),
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExpenseId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
