//! Liability records and term validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::error::LiabilityError;

/// A tracked debt or recurring expense obligation.
///
/// `monthly_expense` is a derived value for long-term liabilities: it caches
/// the figure computed by [`crate::core::amortize`] and must be recomputed
/// whenever `amount`, `interest_rate`, `date` or `end_date` change. For flat
/// liabilities it is unused; the scheduler charges `amount` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Liability {
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub long_term: bool,
    #[serde(default)]
    pub interest_rate: f64,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub monthly_expense: f64,
}

impl Liability {
    /// Creates a one-time flat expense.
    pub fn flat(name: &str, amount: f64, date: NaiveDate) -> Self {
        Liability {
            name: name.to_string(),
            amount,
            date,
            long_term: false,
            interest_rate: 0.0,
            end_date: None,
            monthly_expense: 0.0,
        }
    }

    /// Creates a long-term liability amortized between `date` and `end_date`.
    ///
    /// The monthly figure starts at zero; callers run
    /// [`crate::core::amortize::recompute`] before scheduling.
    pub fn long_term(
        name: &str,
        amount: f64,
        date: NaiveDate,
        end_date: NaiveDate,
        interest_rate: f64,
    ) -> Self {
        Liability {
            name: name.to_string(),
            amount,
            date,
            long_term: true,
            interest_rate,
            end_date: Some(end_date),
            monthly_expense: 0.0,
        }
    }

    /// Fails fast on malformed terms.
    ///
    /// The form/CLI layer is expected to reject these before the engine runs;
    /// a failure here indicates a data-integrity problem, not user input.
    pub fn validate(&self) -> Result<(), LiabilityError> {
        if self.name.trim().is_empty() {
            return Err(LiabilityError::validation("name must not be empty"));
        }
        if self.amount < 0.0 {
            return Err(LiabilityError::validation(format!(
                "amount must be non-negative, got {}",
                self.amount
            )));
        }
        if self.interest_rate < 0.0 {
            return Err(LiabilityError::validation(format!(
                "interest rate must be non-negative, got {}",
                self.interest_rate
            )));
        }
        if self.long_term {
            match self.end_date {
                None => {
                    return Err(LiabilityError::validation(
                        "long-term liability requires an end date",
                    ));
                }
                Some(end) if end <= self.date => {
                    return Err(LiabilityError::validation(format!(
                        "end date {} must be after start date {}",
                        end, self.date
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
