//! Report data assembled from the expense store

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Category, Expense, Money};
use crate::services::ExpenseStore;
use crate::storage::KeyValueStore;

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of the filtered expenses and their totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseReport {
    pub schema_version: String,

    pub title: String,

    pub generated_at: DateTime<Utc>,

    /// Month prefix the report was filtered by, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_filter: Option<String>,

    pub expenses: Vec<Expense>,

    /// Total spend over `expenses` (absolute value of the balance)
    pub total_expenses: Money,

    pub category_totals: BTreeMap<Category, Money>,
}

impl ExpenseReport {
    /// Build a report from the store's current filter
    pub fn from_store<S: KeyValueStore>(store: &ExpenseStore<S>, title: impl Into<String>) -> Self {
        let month_filter = match store.month_filter() {
            "" => None,
            prefix => Some(prefix.to_string()),
        };

        Self {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            title: title.into(),
            generated_at: Utc::now(),
            month_filter,
            expenses: store.filtered().into_iter().cloned().collect(),
            total_expenses: store.balance().abs(),
            category_totals: store.category_totals().into_inner(),
        }
    }

    /// Human-readable description of the covered period
    pub fn period_label(&self) -> String {
        match &self.month_filter {
            Some(prefix) => prefix.clone(),
            None => "All months".to_string(),
        }
    }
}
