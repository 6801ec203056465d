//! Monthly payment calculation for long-term liabilities.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::core::error::LiabilityError;
use crate::core::liability::Liability;

/// Whole calendar months between two dates, ignoring the day component.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32
}

/// Computes the constant monthly payment for a liability.
///
/// Flat liabilities pass their existing `monthly_expense` through unchanged.
/// For long-term liabilities with a zero interest rate the principal is
/// spread over the elapsed days between start and end, with a "month"
/// defined as exactly 30 days; the result is not rounded. With a positive
/// rate the standard amortizing-loan formula applies over the whole calendar
/// months remaining between `reference` and the end date, rounded to two
/// decimals.
///
/// `reference` replaces the ambient clock so the calculation is a pure
/// function of its arguments; the application layer passes today's date.
pub fn monthly_expense(
    liability: &Liability,
    reference: NaiveDate,
) -> Result<f64, LiabilityError> {
    if !liability.long_term {
        return Ok(liability.monthly_expense);
    }

    liability.validate()?;
    let end_date = liability
        .end_date
        .ok_or_else(|| LiabilityError::validation("long-term liability requires an end date"))?;

    if liability.interest_rate == 0.0 {
        // Straight-line payoff over the day span, 30 days to a month.
        let days = (end_date - liability.date).num_days() as f64;
        let payment = liability.amount / (days / 30.0);
        debug!(
            name = %liability.name,
            days,
            payment,
            "computed straight-line monthly expense"
        );
        return Ok(payment);
    }

    let months = months_between(reference, end_date);
    if months <= 0 {
        return Err(LiabilityError::arithmetic(format!(
            "no whole months remain between {} and {}",
            reference, end_date
        )));
    }

    let monthly_rate = liability.interest_rate / 12.0 / 100.0;
    let payment =
        liability.amount * monthly_rate / (1.0 - (1.0 + monthly_rate).powi(-months));
    let payment = (payment * 100.0).round() / 100.0;
    debug!(
        name = %liability.name,
        months,
        monthly_rate,
        payment,
        "computed amortized monthly expense"
    );
    Ok(payment)
}

/// Refreshes the cached monthly figure on a long-term liability.
///
/// This is the save hook: it must run after every mutation of the terms the
/// cached value depends on. Flat liabilities are left untouched.
pub fn recompute(liability: &mut Liability, reference: NaiveDate) -> Result<(), LiabilityError> {
    if liability.long_term {
        liability.monthly_expense = monthly_expense(liability, reference)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_flat_liability_passes_monthly_expense_through() {
        let mut liability = Liability::flat("Insurance", 500.0, date(2024, 3, 15));
        liability.monthly_expense = 42.5;

        let result = monthly_expense(&liability, date(2024, 3, 15)).unwrap();
        assert_eq!(result, 42.5);
    }

    #[test]
    fn test_zero_rate_spreads_over_30_day_months() {
        // 2023-01-01 to 2023-04-01 is exactly 90 days: three 30-day months.
        let liability =
            Liability::long_term("Loan", 1200.0, date(2023, 1, 1), date(2023, 4, 1), 0.0);

        let result = monthly_expense(&liability, date(2023, 1, 1)).unwrap();
        assert_eq!(result, 400.0);
    }

    #[test]
    fn test_zero_rate_result_is_not_rounded() {
        // Leap year: 2024-01-01 to 2024-04-01 spans 91 days.
        let liability =
            Liability::long_term("Loan", 1200.0, date(2024, 1, 1), date(2024, 4, 1), 0.0);

        let result = monthly_expense(&liability, date(2024, 1, 1)).unwrap();
        let expected = 1200.0 / (91.0 / 30.0);
        assert!((result - expected).abs() < 1e-9);
    }

    #[test]
    fn test_amortized_payment_matches_standard_formula() {
        // Classic 30-year 100k mortgage at 6% nominal: 599.55/month.
        let liability = Liability::long_term(
            "Mortgage",
            100_000.0,
            date(1995, 3, 10),
            date(2025, 3, 10),
            6.0,
        );

        let result = monthly_expense(&liability, date(1995, 3, 10)).unwrap();
        assert_eq!(result, 599.55);
    }

    #[test]
    fn test_amortized_payment_covers_principal() {
        let reference = date(2024, 1, 15);
        let liability =
            Liability::long_term("Loan", 15_000.0, reference, date(2027, 1, 15), 8.5);

        let months = months_between(reference, liability.end_date.unwrap());
        let payment = monthly_expense(&liability, reference).unwrap();
        assert!(payment * months as f64 >= liability.amount);
    }

    #[test]
    fn test_amortized_payment_is_idempotent() {
        let reference = date(2024, 6, 1);
        let liability =
            Liability::long_term("Loan", 9_000.0, reference, date(2026, 6, 1), 4.2);

        let first = monthly_expense(&liability, reference).unwrap();
        let second = monthly_expense(&liability, reference).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_months_remaining_is_an_arithmetic_error() {
        // End date in the same calendar month as the reference.
        let liability =
            Liability::long_term("Loan", 1000.0, date(2024, 6, 1), date(2024, 6, 20), 5.0);

        let result = monthly_expense(&liability, date(2024, 6, 5));
        assert!(matches!(result, Err(LiabilityError::Arithmetic { .. })));
    }

    #[test]
    fn test_reference_past_end_date_is_an_arithmetic_error() {
        let liability =
            Liability::long_term("Loan", 1000.0, date(2023, 1, 1), date(2023, 12, 1), 5.0);

        let result = monthly_expense(&liability, date(2024, 3, 1));
        assert!(matches!(result, Err(LiabilityError::Arithmetic { .. })));
    }

    #[test]
    fn test_invalid_terms_are_a_validation_error() {
        let liability =
            Liability::long_term("Loan", 1000.0, date(2024, 6, 1), date(2024, 1, 1), 5.0);

        let result = monthly_expense(&liability, date(2024, 1, 1));
        assert!(matches!(result, Err(LiabilityError::Validation { .. })));
    }

    #[test]
    fn test_recompute_refreshes_long_term_only() {
        let reference = date(2023, 1, 1);
        let mut long_term =
            Liability::long_term("Loan", 1200.0, reference, date(2023, 4, 1), 0.0);
        recompute(&mut long_term, reference).unwrap();
        assert_eq!(long_term.monthly_expense, 400.0);

        let mut flat = Liability::flat("Insurance", 500.0, reference);
        flat.monthly_expense = 7.0;
        recompute(&mut flat, reference).unwrap();
        assert_eq!(flat.monthly_expense, 7.0);
    }

    #[test]
    fn test_months_between_ignores_days() {
        assert_eq!(months_between(date(2024, 1, 31), date(2024, 2, 1)), 1);
        assert_eq!(months_between(date(2024, 1, 1), date(2024, 1, 31)), 0);
        assert_eq!(months_between(date(2023, 11, 15), date(2024, 2, 15)), 3);
        assert_eq!(months_between(date(2024, 2, 1), date(2024, 1, 1)), -1);
    }
}
