//! Summary statistics for the dashboard cards.

use time::OffsetDateTime;

use crate::transaction::Transaction;

/// The aggregate figures for a pair of current and previous transaction
/// windows, one field per dashboard card plus its change figure.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodStats {
    /// The number of transactions in the current window.
    pub transaction_count: usize,
    /// The sum of amounts over the current window, in minor currency units.
    pub total_amount: i64,
    /// The mean amount over the current window, in minor currency units.
    /// Zero when the window is empty.
    pub average_amount: i64,
    /// The change of the total against the previous window, as a percentage.
    pub percent_change: f64,
    /// The change of the average against the previous window's average, as a
    /// percentage.
    pub average_change_percent: f64,
    /// The change of the transaction count against the previous window, as a
    /// percentage.
    pub count_change_percent: f64,
    /// The date of the first transaction in the current window; `None` is
    /// the no-activity sentinel. Callers pass the window newest-first for
    /// this to be the most recent activity.
    pub most_recent_date: Option<OffsetDateTime>,
}

/// Reduce a pair of transaction windows to the dashboard card figures.
///
/// Sums and averages stay in integer minor units; only the change figures
/// are floating point. Each metric is computed independently from the same
/// input pair, the inputs are never mutated, and identical inputs yield
/// bit-identical output. The aggregator does not sort.
pub fn summarize(current: &[&Transaction], previous: &[&Transaction]) -> PeriodStats {
    let transaction_count = current.len();
    let total_amount: i64 = current.iter().map(|t| t.amount).sum();
    let previous_total: i64 = previous.iter().map(|t| t.amount).sum();

    let average_amount = if transaction_count > 0 {
        total_amount / transaction_count as i64
    } else {
        0
    };

    let average_change_percent = if transaction_count == 0 {
        0.0
    } else {
        let previous_average = previous_total / previous.len().max(1) as i64;
        change_percent(average_amount, previous_average)
    };

    let count_change_percent = (transaction_count as i64 - previous.len() as i64) as f64
        / previous.len().max(1) as f64
        * 100.0;

    PeriodStats {
        transaction_count,
        total_amount,
        average_amount,
        percent_change: change_percent(total_amount, previous_total),
        average_change_percent,
        count_change_percent,
        most_recent_date: current.first().map(|t| t.transaction_date),
    }
}

// A zero baseline reports a flat 100% increase rather than dividing by zero.
// This includes the case where both values are zero.
fn change_percent(new: i64, old: i64) -> f64 {
    if old == 0 {
        100.0
    } else {
        (new - old) as f64 / old as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use time::{Duration, OffsetDateTime, macros::datetime};

    use crate::transaction::Transaction;

    use super::summarize;

    fn create_test_transaction(id: i64, amount: i64, date: OffsetDateTime) -> Transaction {
        Transaction {
            id,
            title: format!("transaction #{id}"),
            description: None,
            amount,
            transaction_date: date,
            from_account_id: 1,
            to_account_id: 2,
        }
    }

    #[test]
    fn empty_previous_clamps_percent_change_to_100() {
        let now = datetime!(2024-03-15 12:00 UTC);
        let transactions = vec![create_test_transaction(1, 1000, now)];
        let current: Vec<&Transaction> = transactions.iter().collect();

        let got = summarize(&current, &[]);

        assert_eq!(100.0, got.percent_change);
    }

    #[test]
    fn both_windows_empty_still_reports_100_percent() {
        let got = summarize(&[], &[]);

        assert_eq!(100.0, got.percent_change);
        assert_eq!(0.0, got.count_change_percent);
    }

    #[test]
    fn empty_current_yields_zero_average_and_no_activity() {
        let now = datetime!(2024-03-15 12:00 UTC);
        let transactions = vec![create_test_transaction(1, 500, now)];
        let previous: Vec<&Transaction> = transactions.iter().collect();

        let got = summarize(&[], &previous);

        assert_eq!(0, got.average_amount);
        assert_eq!(0, got.transaction_count);
        assert_eq!(None, got.most_recent_date);
        assert_eq!(0.0, got.average_change_percent);
    }

    #[test]
    fn doubled_total_is_a_100_percent_change() {
        let now = datetime!(2024-03-15 12:00 UTC);
        let current_transactions = vec![create_test_transaction(1, 1000, now - Duration::days(1))];
        let previous_transactions =
            vec![create_test_transaction(2, 500, now - Duration::days(10))];
        let current: Vec<&Transaction> = current_transactions.iter().collect();
        let previous: Vec<&Transaction> = previous_transactions.iter().collect();

        let got = summarize(&current, &previous);

        assert_eq!(1000, got.total_amount);
        assert_eq!(1000, got.average_amount);
        assert_eq!(100.0, got.percent_change);
        assert_eq!(100.0, got.average_change_percent);
        assert_eq!(0.0, got.count_change_percent);
        assert_eq!(Some(now - Duration::days(1)), got.most_recent_date);
    }

    #[test]
    fn average_uses_integer_division_in_minor_units() {
        let now = datetime!(2024-03-15 12:00 UTC);
        let transactions = vec![
            create_test_transaction(1, 1001, now),
            create_test_transaction(2, 1000, now),
        ];
        let current: Vec<&Transaction> = transactions.iter().collect();

        let got = summarize(&current, &[]);

        assert_eq!(2001, got.total_amount);
        assert_eq!(1000, got.average_amount);
    }

    #[test]
    fn count_change_guards_empty_previous_window() {
        let now = datetime!(2024-03-15 12:00 UTC);
        let transactions = vec![
            create_test_transaction(1, 100, now),
            create_test_transaction(2, 100, now),
        ];
        let current: Vec<&Transaction> = transactions.iter().collect();

        let got = summarize(&current, &[]);

        assert_eq!(200.0, got.count_change_percent);
    }

    #[test]
    fn negative_change_is_reported_for_a_shrinking_total() {
        let now = datetime!(2024-03-15 12:00 UTC);
        let current_transactions = vec![create_test_transaction(1, 500, now)];
        let previous_transactions = vec![create_test_transaction(2, 1000, now)];
        let current: Vec<&Transaction> = current_transactions.iter().collect();
        let previous: Vec<&Transaction> = previous_transactions.iter().collect();

        let got = summarize(&current, &previous);

        assert_eq!(-50.0, got.percent_change);
    }

    #[test]
    fn most_recent_date_is_the_first_element() {
        let now = datetime!(2024-03-15 12:00 UTC);
        let transactions = vec![
            create_test_transaction(1, 100, now - Duration::days(1)),
            create_test_transaction(2, 100, now - Duration::days(5)),
        ];
        let current: Vec<&Transaction> = transactions.iter().collect();

        let got = summarize(&current, &[]);

        assert_eq!(Some(now - Duration::days(1)), got.most_recent_date);
    }
}
