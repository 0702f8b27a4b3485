//! Data models shared across the forecast pipeline

use serde::{Deserialize, Serialize};

/// A single ledger row as parsed from delimited input
///
/// The date is carried as the raw input string; it is validated when the
/// aggregator buckets records into months. Immutable once parsed.
///
/// Sign convention: positive amounts under the `Income` category are
/// inflow; every other category is treated as an expense regardless of
/// sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: String,
    pub category: String,
    pub amount: f64,
}

/// Summed expense amount for one category within a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Aggregated totals for one calendar month
///
/// Keyed by a canonical zero-padded "YYYY-MM" identifier. The category
/// breakdown lists expense categories in order of first occurrence
/// (the income category is excluded); delta ranking relies on that
/// order for tie-breaking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// Canonical "YYYY-MM" month key
    pub month: String,
    pub total_expenses: f64,
    pub total_income: f64,
    /// Always recomputed as income minus expenses, never stored
    /// independently of its inputs
    pub cash_flow: f64,
    pub category_breakdown: Vec<CategoryTotal>,
}

impl MonthlyStats {
    pub(crate) fn new(month: String) -> Self {
        Self {
            month,
            total_expenses: 0.0,
            total_income: 0.0,
            cash_flow: 0.0,
            category_breakdown: Vec::new(),
        }
    }

    /// Accumulate an expense into the month total and category breakdown
    pub(crate) fn add_expense(&mut self, category: &str, amount: f64) {
        self.total_expenses += amount;
        match self
            .category_breakdown
            .iter_mut()
            .find(|c| c.category == category)
        {
            Some(entry) => entry.amount += amount,
            None => self.category_breakdown.push(CategoryTotal {
                category: category.to_string(),
                amount,
            }),
        }
    }

    /// Expense total for a category, or 0 if the category is absent
    pub fn category_amount(&self, category: &str) -> f64 {
        self.category_breakdown
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.amount)
            .unwrap_or(0.0)
    }
}

/// Month-over-month change for one expense category
///
/// Derived by comparing the two most recent months; recomputed per
/// analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryChange {
    pub category: String,
    pub previous_amount: f64,
    pub current_amount: f64,
    pub percentage_change: f64,
}

/// Output of an analysis run
///
/// The sole artifact handed to downstream consumers (report rendering,
/// narrative generation). Valid and displayable whether or not a
/// narrative is later produced for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Mean of total expenses over the trailing window
    pub predicted_next_month_expenses: f64,
    /// Latest observed income minus predicted expenses
    pub predicted_next_month_cash_flow: f64,
    /// Per-month statistics, sorted ascending by month key
    pub monthly_stats: Vec<MonthlyStats>,
    /// Top category changes between the two most recent months, ranked
    /// by magnitude; empty when fewer than two months of history exist
    pub significant_changes: Vec<CategoryChange>,
    /// The most recent month's statistics
    pub last_month: MonthlyStats,
}
