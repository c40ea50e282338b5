//! Pure aggregation over in-memory transaction lists. No IO happens here.

use chrono::{DateTime, Datelike, Utc};

use crate::domain::Transaction;

/// Income and expense sums for a single calendar month. Both fields are
/// non-negative; an all-zero result is a valid output for an empty month.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyTotals {
    pub income: f64,
    pub expense: f64,
}

/// Signed sum of the full transaction history, unconstrained by date.
pub fn balance(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|txn| txn.amount).sum()
}

/// Totals restricted to transactions dated within the same calendar month and
/// year as `reference`. Entries outside that month are ignored entirely; this
/// is a calendar match, not a rolling 30-day window.
pub fn monthly_totals(transactions: &[Transaction], reference: DateTime<Utc>) -> MonthlyTotals {
    let year = reference.year();
    let month = reference.month();
    let mut totals = MonthlyTotals::default();
    for txn in transactions {
        if txn.date.year() != year || txn.date.month() != month {
            continue;
        }
        if txn.amount >= 0.0 {
            totals.income += txn.amount;
        } else {
            totals.expense += -txn.amount;
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionType;

    fn date(iso: &str) -> DateTime<Utc> {
        iso.parse().unwrap()
    }

    fn txn(kind: TransactionType, abs_amount: f64, iso: &str) -> Transaction {
        Transaction::new(kind, abs_amount, "", date(iso))
    }

    #[test]
    fn empty_history_yields_zeroes() {
        assert_eq!(balance(&[]), 0.0);
        let totals = monthly_totals(&[], date("2024-03-20T00:00:00Z"));
        assert_eq!(totals, MonthlyTotals::default());
    }

    #[test]
    fn balance_is_signed_sum_across_all_dates() {
        let history = vec![
            txn(TransactionType::Income, 100.0, "2024-03-15T10:00:00Z"),
            txn(TransactionType::Expense, 40.0, "2024-03-16T10:00:00Z"),
            txn(TransactionType::Expense, 10.0, "2024-02-01T10:00:00Z"),
        ];
        assert_eq!(balance(&history), 50.0);
    }

    #[test]
    fn monthly_totals_count_only_the_reference_month() {
        let history = vec![
            txn(TransactionType::Income, 100.0, "2024-03-15T10:00:00Z"),
            txn(TransactionType::Expense, 40.0, "2024-03-16T10:00:00Z"),
            txn(TransactionType::Expense, 10.0, "2024-02-01T10:00:00Z"),
        ];
        let totals = monthly_totals(&history, date("2024-03-20T00:00:00Z"));
        assert_eq!(totals.income, 100.0);
        assert_eq!(totals.expense, 40.0);
    }

    #[test]
    fn last_instant_of_prior_month_is_excluded() {
        let history = vec![txn(TransactionType::Expense, 5.0, "2024-02-29T23:59:59Z")];
        let totals = monthly_totals(&history, date("2024-03-01T00:00:00Z"));
        assert_eq!(totals, MonthlyTotals::default());
    }

    #[test]
    fn same_month_of_another_year_is_excluded() {
        let history = vec![txn(TransactionType::Income, 7.0, "2023-03-10T00:00:00Z")];
        let totals = monthly_totals(&history, date("2024-03-10T00:00:00Z"));
        assert_eq!(totals, MonthlyTotals::default());
    }
}
