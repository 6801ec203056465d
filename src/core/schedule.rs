//! Calendar expansion of liabilities into a monthly expense schedule.

use std::collections::HashMap;

use chrono::{Months, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::core::error::LiabilityError;
use crate::core::liability::Liability;

/// A single projected expense for one liability in one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseEntry {
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// One charted point: a month label and the total expenses due in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedPoint {
    pub year_month: String,
    pub total_expenses: f64,
}

/// Month-keyed expense buckets preserving first-seen key order.
///
/// Key order is a contract for the aggregated series, so it is tracked in an
/// explicit index vector instead of relying on any map's iteration order.
#[derive(Debug, Default)]
pub struct MonthlyBuckets {
    keys: Vec<String>,
    buckets: HashMap<String, Vec<ExpenseEntry>>,
}

impl MonthlyBuckets {
    fn insert(&mut self, key: String, entry: ExpenseEntry) {
        if !self.buckets.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.buckets.entry(key).or_default().push(entry);
    }

    /// Month labels in first-seen order.
    pub fn months(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Entries recorded under a month label, in insertion order.
    pub fn get(&self, month: &str) -> Option<&[ExpenseEntry]> {
        self.buckets.get(month).map(Vec::as_slice)
    }

    /// `(label, entries)` pairs in first-seen label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ExpenseEntry])> {
        self.keys.iter().map(|key| {
            let entries = self
                .buckets
                .get(key)
                .map(Vec::as_slice)
                .unwrap_or_default();
            (key.as_str(), entries)
        })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// The expanded schedule: per-month detail plus the aggregated series.
#[derive(Debug)]
pub struct ExpenseSchedule {
    pub detail: MonthlyBuckets,
    pub aggregated: Vec<AggregatedPoint>,
}

impl ExpenseSchedule {
    /// Splits the aggregated series into the two parallel sequences a
    /// charting consumer expects: month labels and totals, in the same order.
    pub fn chart_series(&self) -> (Vec<String>, Vec<f64>) {
        let months = self
            .aggregated
            .iter()
            .map(|point| point.year_month.clone())
            .collect();
        let expenses = self
            .aggregated
            .iter()
            .map(|point| point.total_expenses)
            .collect();
        (months, expenses)
    }
}

/// Expands liabilities, in input order, into the monthly schedule.
///
/// Long-term liabilities with a non-zero monthly figure contribute one entry
/// per calendar month from `date` through `end_date` inclusive; everything
/// else contributes a single flat entry in its start month. The aggregated
/// series carries one total per month label in first-seen order. Inputs are
/// never mutated and nothing is retained across calls.
pub fn build_schedule(liabilities: &[Liability]) -> Result<ExpenseSchedule, LiabilityError> {
    let mut detail = MonthlyBuckets::default();

    for liability in liabilities {
        if liability.long_term && liability.monthly_expense != 0.0 {
            liability.validate()?;
            let end_date = liability.end_date.ok_or_else(|| {
                LiabilityError::validation("long-term liability requires an end date")
            })?;

            let mut current = liability.date;
            while current <= end_date {
                detail.insert(
                    month_key(current),
                    ExpenseEntry {
                        name: liability.name.clone(),
                        amount: liability.monthly_expense,
                        date: current,
                        end_date: Some(end_date),
                    },
                );
                current = step_month(current)?;
            }
        } else {
            detail.insert(
                month_key(liability.date),
                ExpenseEntry {
                    name: liability.name.clone(),
                    amount: liability.amount,
                    date: liability.date,
                    end_date: None,
                },
            );
        }
    }

    let aggregated = detail
        .iter()
        .map(|(key, entries)| AggregatedPoint {
            year_month: key.to_string(),
            total_expenses: entries.iter().map(|entry| entry.amount).sum(),
        })
        .collect();

    debug!(
        liabilities = liabilities.len(),
        months = detail.len(),
        "built expense schedule"
    );
    Ok(ExpenseSchedule { detail, aggregated })
}

fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

fn step_month(date: NaiveDate) -> Result<NaiveDate, LiabilityError> {
    date.checked_add_months(Months::new(1))
        .ok_or_else(|| LiabilityError::arithmetic(format!("adding 1 month to {date} overflowed")))
}
