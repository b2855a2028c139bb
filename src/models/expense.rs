//! Expense model
//!
//! An expense is a single spending event. `NewExpense` carries the raw form
//! input; `Expense::from_input` validates it into a record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;
use super::month::Month;

/// Date format used for storage and for month-prefix matching
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw user input for a new expense, as entered in the form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewExpense {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl NewExpense {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
}

impl Expense {
    /// Validate raw input and build a record with the given id
    pub fn from_input(id: ExpenseId, input: &NewExpense) -> Result<Self, ExpenseValidationError> {
        let description = input.description.trim();
        if description.is_empty() {
            return Err(ExpenseValidationError::MissingField("description"));
        }

        if input.amount.trim().is_empty() {
            return Err(ExpenseValidationError::MissingField("amount"));
        }
        let amount = Money::parse(&input.amount)
            .map_err(|_| ExpenseValidationError::InvalidAmount(input.amount.trim().to_string()))?;
        let raw_amount = input.amount.trim();
        if amount.is_zero() && !raw_amount.starts_with('-') && has_nonzero_digit(raw_amount) {
            return Err(ExpenseValidationError::RoundsToZero(raw_amount.to_string()));
        }
        if !amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(amount));
        }

        let category = Category::new(&input.category)
            .ok_or(ExpenseValidationError::MissingField("category"))?;

        let date_input = input.date.trim();
        if date_input.is_empty() {
            return Err(ExpenseValidationError::MissingField("date"));
        }
        let date = NaiveDate::parse_from_str(date_input, DATE_FORMAT)
            .map_err(|_| ExpenseValidationError::InvalidDate(date_input.to_string()))?;

        Ok(Self {
            id,
            description: description.to_string(),
            amount,
            category,
            date,
        })
    }

    /// Check the record invariants; used on records loaded from storage
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::MissingField("description"));
        }
        if self.category.is_blank() {
            return Err(ExpenseValidationError::MissingField("category"));
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }

    /// The date as stored, `YYYY-MM-DD`
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Whether this expense falls under a month filter prefix
    ///
    /// An empty prefix matches everything.
    pub fn matches_month(&self, prefix: &str) -> bool {
        prefix.is_empty() || self.date_string().starts_with(prefix)
    }

    pub fn month(&self) -> Month {
        Month::of(self.date)
    }
}

fn has_nonzero_digit(raw: &str) -> bool {
    raw.bytes().any(|b| (b'1'..=b'9').contains(&b))
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {}",
            self.description, self.category, self.amount
        )
    }
}

/// Validation errors for expense input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingField(&'static str),
    InvalidAmount(String),
    NonPositiveAmount(Money),
    /// Positive input smaller than half a cent
    RoundsToZero(String),
    InvalidDate(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{} is required", field),
            Self::InvalidAmount(raw) => write!(f, "amount '{}' is not a number", raw),
            Self::NonPositiveAmount(amount) => {
                write!(f, "amount must be greater than zero (got {})", amount)
            }
            Self::RoundsToZero(raw) => write!(
                f,
                "amount '{}' rounds to 0.00; the smallest amount is 0.01",
                raw
            ),
            Self::InvalidDate(raw) => write!(f, "date '{}' is not a YYYY-MM-DD date", raw),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
