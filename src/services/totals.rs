//! Per-category spending totals

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::models::{Category, Expense, Money};

/// Summed amount per category
///
/// Iteration is alphabetical by category. Use [`CategoryTotals::by_amount`]
/// for a largest-first ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    totals: BTreeMap<Category, Money>,
}

impl CategoryTotals {
    /// Aggregate a set of expenses by category
    pub fn from_expenses<'a, I>(expenses: I) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut totals: BTreeMap<Category, Money> = BTreeMap::new();
        for expense in expenses {
            *totals.entry(expense.category.clone()).or_default() += expense.amount;
        }
        Self { totals }
    }

    /// Total for a category label, if it has any spending
    pub fn get(&self, category: &str) -> Option<Money> {
        Category::new(category).and_then(|key| self.totals.get(&key).copied())
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Category, Money> {
        self.totals.iter()
    }

    /// Sum over all categories
    pub fn total(&self) -> Money {
        self.totals.values().sum()
    }

    /// Entries ordered by amount, largest first; ties broken by name
    pub fn by_amount(&self) -> Vec<(&Category, Money)> {
        let mut entries: Vec<_> = self.totals.iter().map(|(c, m)| (c, *m)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Share of the overall total for `amount`, as a percentage
    pub fn percentage(&self, amount: Money) -> f64 {
        let total = self.total();
        if total.is_zero() {
            0.0
        } else {
            amount.cents() as f64 / total.cents() as f64 * 100.0
        }
    }

    pub fn into_inner(self) -> BTreeMap<Category, Money> {
        self.totals
    }
}

impl<'a> IntoIterator for &'a CategoryTotals {
    type Item = (&'a Category, &'a Money);
    type IntoIter = btree_map::Iter<'a, Category, Money>;

    fn into_iter(self) -> Self::IntoIter {
        self.totals.iter()
    }
}
