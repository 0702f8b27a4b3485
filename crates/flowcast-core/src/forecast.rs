//! Monthly aggregation and trailing-average forecasting
//!
//! Buckets records by calendar month, totals income and expenses,
//! averages the trailing window to predict next month's expenses, and
//! ranks month-over-month category changes. Not a statistical model:
//! the forecast is a fixed 3-point trailing average with the latest
//! observed income carried forward.

use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{CategoryChange, ForecastResult, MonthlyStats, TransactionRecord};

/// Number of trailing months averaged for the expense forecast
const FORECAST_WINDOW_MONTHS: usize = 3;

/// Number of top-ranked category changes kept in the result
const TOP_CHANGES: usize = 3;

/// Category label treated as income rather than expense (case-insensitive)
const INCOME_CATEGORY: &str = "income";

/// Run the aggregate/forecast pipeline over parsed records
///
/// Fails with [`Error::Analysis`] on an empty input and with
/// [`Error::InvalidData`] if any record's date cannot be parsed. Each
/// run is independent and idempotent.
pub fn analyze(records: &[TransactionRecord]) -> Result<ForecastResult> {
    if records.is_empty() {
        return Err(Error::Analysis("no data to analyze".to_string()));
    }

    // Bucket records by month. A Vec keyed by month string keeps the
    // month count small enough that linear lookup beats a map here.
    let mut months: Vec<MonthlyStats> = Vec::new();

    for record in records {
        let key = month_key(&record.date)?;
        let idx = match months.iter().position(|m| m.month == key) {
            Some(i) => i,
            None => {
                months.push(MonthlyStats::new(key));
                months.len() - 1
            }
        };

        if record.category.eq_ignore_ascii_case(INCOME_CATEGORY) {
            months[idx].total_income += record.amount;
        } else {
            months[idx].add_expense(&record.category, record.amount);
        }
    }

    // Cash flow is derived from its inputs after all records are bucketed
    for month in &mut months {
        month.cash_flow = month.total_income - month.total_expenses;
    }

    // Zero-padded "YYYY-MM" keys make lexicographic order chronological
    months.sort_by(|a, b| a.month.cmp(&b.month));

    let last_month = match months.last() {
        Some(m) => m.clone(),
        None => return Err(Error::Analysis("no data to analyze".to_string())),
    };

    // Trailing window of up to the last 3 months; even a single month
    // is a valid window.
    let window = &months[months.len().saturating_sub(FORECAST_WINDOW_MONTHS)..];
    let predicted_next_month_expenses =
        window.iter().map(|m| m.total_expenses).sum::<f64>() / window.len() as f64;

    // Income is not averaged: only the latest observed income is
    // projected forward.
    let predicted_next_month_cash_flow = last_month.total_income - predicted_next_month_expenses;

    let significant_changes = rank_category_changes(&months);

    debug!(
        "Analyzed {} records across {} months (window of {})",
        records.len(),
        months.len(),
        window.len()
    );

    Ok(ForecastResult {
        predicted_next_month_expenses,
        predicted_next_month_cash_flow,
        monthly_stats: months,
        significant_changes,
        last_month,
    })
}

/// Compare the two most recent months and rank category changes
///
/// Only categories present in the latest month are candidates; a
/// category that vanished entirely is not reported. Requires at least
/// two months of history, otherwise the list is empty.
fn rank_category_changes(months: &[MonthlyStats]) -> Vec<CategoryChange> {
    let mut changes: Vec<CategoryChange> = Vec::new();

    if months.len() >= 2 {
        let current = &months[months.len() - 1];
        let previous = &months[months.len() - 2];

        for entry in &current.category_breakdown {
            let current_amount = entry.amount;
            let previous_amount = previous.category_amount(&entry.category);

            // A category appearing from nothing counts as +100%, an
            // all-zero pair as 0%. Policy choice, not a limit.
            let percentage_change = if previous_amount == 0.0 {
                if current_amount > 0.0 {
                    100.0
                } else {
                    0.0
                }
            } else {
                (current_amount - previous_amount) / previous_amount * 100.0
            };

            changes.push(CategoryChange {
                category: entry.category.clone(),
                previous_amount,
                current_amount,
                percentage_change,
            });
        }
    }

    // sort_by is stable, so ties keep the latest month's first-occurrence order
    changes.sort_by(|a, b| {
        b.percentage_change
            .abs()
            .partial_cmp(&a.percentage_change.abs())
            .unwrap_or(Ordering::Equal)
    });
    changes.truncate(TOP_CHANGES);
    changes
}

/// Derive the canonical "YYYY-MM" month key for a transaction date
fn month_key(date: &str) -> Result<String> {
    let date = parse_date(date)?;
    Ok(format!("{}-{:02}", date.year(), date.month()))
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    // Try common date formats
    let formats = [
        "%Y-%m-%d", // 2024-01-15 (reference format)
        "%m/%d/%Y", // 01/15/2024
        "%m/%d/%y", // 01/15/24
        "%m-%d-%Y", // 01-15-2024
        "%d/%m/%Y", // 15/01/2024 (European)
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    Err(Error::InvalidData(format!("Unable to parse date: {}", s)))
}
