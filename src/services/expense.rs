//! Expense store
//!
//! Owns the in-memory list of expenses and the current month filter. Every
//! mutation re-serializes the whole list to the key-value backend before
//! returning; all derived views (balance, category totals, months) are
//! computed on demand from the current list.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money, Month, NewExpense};
use crate::storage::KeyValueStore;

use super::totals::CategoryTotals;

/// Key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "expense";

/// The expense list plus its month filter, backed by a key-value store
pub struct ExpenseStore<S> {
    storage: S,
    key: String,
    expenses: Vec<Expense>,
    month_filter: String,
    audit: Option<AuditLogger>,
}

impl<S: KeyValueStore> ExpenseStore<S> {
    /// Load the persisted list stored under `key`
    ///
    /// A missing or malformed value yields an empty store. Only a backend
    /// read failure is an error.
    pub fn open(storage: S, key: impl Into<String>) -> ExpenseResult<Self> {
        let key = key.into();
        let expenses = match storage.get(&key)? {
            None => {
                debug!(key = %key, "no persisted expenses, starting empty");
                Vec::new()
            }
            Some(raw) => match decode(&raw) {
                Ok(expenses) => {
                    debug!(key = %key, count = expenses.len(), "loaded expenses");
                    expenses
                }
                Err(reason) => {
                    warn!(key = %key, %reason, "discarding malformed expense data");
                    Vec::new()
                }
            },
        };

        Ok(Self {
            storage,
            key,
            expenses,
            month_filter: String::new(),
            audit: None,
        })
    }

    /// Record adds and deletes in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Validate and append a new expense, then persist
    pub fn add(&mut self, input: &NewExpense) -> ExpenseResult<Expense> {
        let last = self.expenses.iter().map(|e| e.id).max();
        let expense = Expense::from_input(ExpenseId::generate(last), input)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.expenses.push(expense.clone());
        if let Err(e) = self.persist() {
            self.expenses.pop();
            return Err(e);
        }

        debug!(id = %expense.id, amount = %expense.amount, "added expense");
        self.audit(AuditEntry::created(&expense));
        Ok(expense)
    }

    /// Remove the expense with `id`; returns whether anything was removed
    pub fn remove(&mut self, id: ExpenseId) -> ExpenseResult<bool> {
        let Some(index) = self.expenses.iter().position(|e| e.id == id) else {
            return Ok(false);
        };

        let removed = self.expenses.remove(index);
        if let Err(e) = self.persist() {
            self.expenses.insert(index, removed);
            return Err(e);
        }

        debug!(id = %id, "removed expense");
        self.audit(AuditEntry::deleted(&removed));
        Ok(true)
    }

    /// Set the month filter; an empty string shows everything
    ///
    /// The value is used as a raw prefix of `YYYY-MM-DD` dates, so anything
    /// that isn't a `YYYY-MM` prefix simply matches nothing.
    pub fn set_month_filter(&mut self, prefix: impl Into<String>) {
        self.month_filter = prefix.into();
    }

    pub fn clear_month_filter(&mut self) {
        self.month_filter.clear();
    }

    pub fn month_filter(&self) -> &str {
        &self.month_filter
    }

    /// Expenses matching the month filter, in insertion order
    pub fn filtered(&self) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.matches_month(&self.month_filter))
            .collect()
    }

    /// Negated total of the filtered expenses
    pub fn balance(&self) -> Money {
        -self.filtered().into_iter().map(|e| e.amount).sum::<Money>()
    }

    /// Filtered expenses summed per category
    pub fn category_totals(&self) -> CategoryTotals {
        CategoryTotals::from_expenses(self.filtered())
    }

    /// Distinct months across all expenses, in order of first occurrence
    ///
    /// Ignores the month filter. Not sorted chronologically.
    pub fn distinct_months(&self) -> Vec<Month> {
        let mut seen = HashSet::new();
        self.expenses
            .iter()
            .map(Expense::month)
            .filter(|month| seen.insert(*month))
            .collect()
    }

    /// Every expense regardless of filter
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the backend, e.g. to reopen it later
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) -> ExpenseResult<()> {
        let json = serde_json::to_string(&self.expenses)?;
        self.storage.set(&self.key, &json)
    }

    fn audit(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}

/// Parse a persisted list, rejecting anything that breaks the record invariants
fn decode(raw: &str) -> Result<Vec<Expense>, String> {
    let expenses: Vec<Expense> = serde_json::from_str(raw).map_err(|e| e.to_string())?;

    let mut ids = HashSet::new();
    for expense in &expenses {
        expense
            .validate()
            .map_err(|e| format!("expense {}: {}", expense.id, e))?;
        if !ids.insert(expense.id) {
            return Err(format!("duplicate expense id {}", expense.id));
        }
    }

    Ok(expenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    fn empty_store() -> ExpenseStore<MemoryStore> {
        ExpenseStore::open(MemoryStore::new(), DEFAULT_STORAGE_KEY).unwrap()
    }

    fn coffee() -> NewExpense {
        NewExpense::new("Coffee", "3.50", "Food", "2024-05-01")
    }

    fn bus() -> NewExpense {
        NewExpense::new("Bus", "2.00", "Transport", "2024-06-01")
    }

    /// Backend whose writes always fail
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> ExpenseResult<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> ExpenseResult<()> {
            Err(ExpenseError::Storage("read-only".into()))
        }
    }

    /// Backend whose reads always fail
    struct UnreadableStore;

    impl KeyValueStore for UnreadableStore {
        fn get(&self, _key: &str) -> ExpenseResult<Option<String>> {
            Err(ExpenseError::Storage("disk on fire".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> ExpenseResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_coffee_and_bus_scenario() {
        let mut store = empty_store();
        store.add(&coffee()).unwrap();
        store.add(&bus()).unwrap();

        assert_eq!(store.balance(), Money::from_cents(-550));
        let totals = store.category_totals();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get("Food"), Some(Money::from_cents(350)));
        assert_eq!(totals.get("Transport"), Some(Money::from_cents(200)));

        store.set_month_filter("2024-05");
        let filtered = store.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].description, "Coffee");
        assert_eq!(store.balance(), Money::from_cents(-350));
    }

    #[test]
    fn test_add_decreases_balance_by_amount() {
        let mut store = empty_store();
        store.add(&bus()).unwrap();
        let before = store.balance();

        let added = store.add(&coffee()).unwrap();

        assert_eq!(store.balance(), before - added.amount);
        assert!(store.filtered().iter().any(|e| e.id == added.id));
    }

    #[test]
    fn test_invalid_add_leaves_store_unchanged() {
        let mut store = empty_store();
        store.add(&coffee()).unwrap();
        let snapshot = store.all().to_vec();

        let bad_inputs = [
            NewExpense { description: "".into(), ..bus() },
            NewExpense { category: "  ".into(), ..bus() },
            NewExpense { date: "".into(), ..bus() },
            NewExpense { amount: "".into(), ..bus() },
            NewExpense { amount: "0".into(), ..bus() },
            NewExpense { amount: "-4".into(), ..bus() },
            NewExpense { amount: "two".into(), ..bus() },
        ];

        for input in &bad_inputs {
            let err = store.add(input).unwrap_err();
            assert!(err.is_validation(), "expected validation error for {:?}", input);
        }

        assert_eq!(store.all(), snapshot.as_slice());
        let persisted = store.storage().get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(persisted, serde_json::to_string(&snapshot).unwrap());
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let mut store = empty_store();
        store.add(&bus()).unwrap();
        let filtered_before: Vec<Expense> = store.filtered().into_iter().cloned().collect();
        let balance_before = store.balance();

        let added = store.add(&coffee()).unwrap();
        assert!(store.remove(added.id).unwrap());

        let filtered_after: Vec<Expense> = store.filtered().into_iter().cloned().collect();
        assert_eq!(filtered_after, filtered_before);
        assert_eq!(store.balance(), balance_before);
    }

    #[test]
    fn test_remove_absent_id() {
        let mut store = empty_store();
        store.add(&coffee()).unwrap();
        let before = store.all().to_vec();

        assert!(!store.remove(ExpenseId::from_raw(1)).unwrap());
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn test_category_totals_match_balance() {
        let mut store = empty_store();
        store.add(&coffee()).unwrap();
        store.add(&bus()).unwrap();
        store
            .add(&NewExpense::new("Lunch", "12.75", "Food", "2024-05-03"))
            .unwrap();

        assert_eq!(store.category_totals().total(), -store.balance());

        store.set_month_filter("2024-05");
        assert_eq!(store.category_totals().total(), -store.balance());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = empty_store();
        let ids: HashSet<ExpenseId> = (0..50).map(|_| store.add(&coffee()).unwrap().id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_filter_behaviour() {
        let mut store = empty_store();
        store.add(&coffee()).unwrap();
        store.add(&bus()).unwrap();

        store.set_month_filter("not-a-month");
        assert!(store.filtered().is_empty());
        assert_eq!(store.balance(), Money::zero());
        assert!(store.category_totals().is_empty());

        store.clear_month_filter();
        assert_eq!(store.month_filter(), "");
        assert_eq!(store.filtered().len(), 2);
    }

    #[test]
    fn test_distinct_months_first_occurrence_order() {
        let mut store = empty_store();
        store.add(&bus()).unwrap();
        store.add(&coffee()).unwrap();
        store
            .add(&NewExpense::new("Rent", "500", "Housing", "2024-06-15"))
            .unwrap();
        store
            .add(&NewExpense::new("Gift", "20", "Other", "2023-12-24"))
            .unwrap();

        store.set_month_filter("2024-05");
        let months: Vec<String> = store.distinct_months().iter().map(|m| m.to_string()).collect();
        assert_eq!(months, vec!["2024-06", "2024-05", "2023-12"]);
    }

    #[test]
    fn test_reopen_preserves_views() {
        let mut store = empty_store();
        store.add(&coffee()).unwrap();
        store.add(&bus()).unwrap();
        store.set_month_filter("2024-06");
        let filtered: Vec<Expense> = store.filtered().into_iter().cloned().collect();
        let balance = store.balance();
        let totals = store.category_totals();

        let mut reopened = ExpenseStore::open(store.into_storage(), DEFAULT_STORAGE_KEY).unwrap();
        reopened.set_month_filter("2024-06");

        let reopened_filtered: Vec<Expense> = reopened.filtered().into_iter().cloned().collect();
        assert_eq!(reopened_filtered, filtered);
        assert_eq!(reopened.balance(), balance);
        assert_eq!(reopened.category_totals(), totals);
    }

    #[test]
    fn test_reopen_from_files() {
        let temp_dir = TempDir::new().unwrap();
        let backend = crate::storage::FileStore::new(temp_dir.path().to_path_buf());
        let mut store = ExpenseStore::open(backend, DEFAULT_STORAGE_KEY).unwrap();
        let added = store.add(&coffee()).unwrap();

        let backend = crate::storage::FileStore::new(temp_dir.path().to_path_buf());
        let reopened = ExpenseStore::open(backend, DEFAULT_STORAGE_KEY).unwrap();
        assert_eq!(reopened.get(added.id), Some(&added));
    }

    #[test]
    fn test_loads_legacy_format() {
        let raw = r#"[
            {"id": 1714521600000, "description": "Coffee", "amount": 3.5, "category": "Food", "date": "2024-05-01"},
            {"id": 1717200000000, "description": "Bus", "amount": 2, "category": "Transport", "date": "2024-06-01"}
        ]"#;
        let backend = MemoryStore::new().with_entry(DEFAULT_STORAGE_KEY, raw);
        let store = ExpenseStore::open(backend, DEFAULT_STORAGE_KEY).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.balance(), Money::from_cents(-550));
    }

    #[test]
    fn test_malformed_data_falls_back_to_empty() {
        let cases = [
            "not json",
            "{\"id\": 1}",
            "[{\"id\": 1, \"description\": \"x\"}]",
            r#"[{"id": 1, "description": "x", "amount": -1, "category": "c", "date": "2024-01-01"}]"#,
            r#"[{"id": 1, "description": "", "amount": 1, "category": "c", "date": "2024-01-01"}]"#,
            r#"[{"id": 1, "description": "x", "amount": 1, "category": "c", "date": "2024-01-01"},
                {"id": 1, "description": "y", "amount": 1, "category": "c", "date": "2024-01-02"}]"#,
        ];

        for raw in cases {
            let backend = MemoryStore::new().with_entry(DEFAULT_STORAGE_KEY, raw);
            let store = ExpenseStore::open(backend, DEFAULT_STORAGE_KEY).unwrap();
            assert!(store.is_empty(), "expected empty store for {}", raw);
        }
    }

    #[test]
    fn test_read_failure_is_an_error() {
        let result = ExpenseStore::open(UnreadableStore, DEFAULT_STORAGE_KEY);
        assert!(matches!(result, Err(ExpenseError::Storage(_))));
    }

    #[test]
    fn test_failed_persist_rolls_back() {
        let raw = serde_json::to_string(&[Expense::from_input(
            ExpenseId::from_raw(1),
            &coffee(),
        )
        .unwrap()])
        .unwrap();
        let backend = ReadOnlyStore(MemoryStore::new().with_entry(DEFAULT_STORAGE_KEY, raw));
        let mut store = ExpenseStore::open(backend, DEFAULT_STORAGE_KEY).unwrap();

        assert!(matches!(store.add(&bus()), Err(ExpenseError::Storage(_))));
        assert_eq!(store.len(), 1);

        assert!(store.remove(ExpenseId::from_raw(1)).is_err());
        assert!(store.get(ExpenseId::from_raw(1)).is_some());
    }

    #[test]
    fn test_audit_entries_written() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut store = empty_store().with_audit(logger.clone());

        let added = store.add(&coffee()).unwrap();
        store.remove(added.id).unwrap();
        store.remove(added.id).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, crate::audit::Operation::Create);
        assert_eq!(entries[1].operation, crate::audit::Operation::Delete);
        assert_eq!(entries[1].expense_id, added.id);
    }

    #[test]
    fn test_largest_amounts_sum_without_overflow() {
        let mut store = empty_store();
        let big = NewExpense::new("Big", "99999999999.99", "Food", "2024-05-01");
        store.add(&big).unwrap();
        store.add(&big).unwrap();

        let expected = Money::from_cents(2 * Money::MAX.cents());
        assert_eq!(store.balance(), -expected);
        assert_eq!(store.category_totals().get("Food"), Some(expected));

        let too_big = NewExpense::new("Big", "90000000000000000", "Food", "2024-05-01");
        assert!(store.add(&too_big).unwrap_err().is_validation());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_reopen_keeps_large_amounts_exact() {
        let mut store = empty_store();
        for amount in ["99999999999.99", "12345678901.67", "0.01"] {
            store.add(&NewExpense::new("Big", amount, "Food", "2024-05-01")).unwrap();
        }
        let balance = store.balance();
        let totals = store.category_totals();

        let reopened = ExpenseStore::open(store.into_storage(), DEFAULT_STORAGE_KEY).unwrap();

        assert_eq!(reopened.len(), 3);
        assert_eq!(reopened.balance(), balance);
        assert_eq!(reopened.category_totals(), totals);
    }
}
