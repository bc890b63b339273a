//! The dashboard's caller-held time-range selection.

use time::OffsetDateTime;

use crate::{
    dashboard::stats::{PeriodStats, summarize},
    transaction::{TimeRange, Transaction, select_windows},
};

/// The time-range state of the dashboard overview.
///
/// The dashboard recomputes its cards from the full snapshot on every
/// interaction; this struct holds the selected range between interactions
/// and drives the pure window and summary functions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSelection {
    /// The selected time range. Opens on all-time.
    pub range: TimeRange,
}

impl DashboardSelection {
    /// Replace the selected time range.
    pub fn select_range(&mut self, range: TimeRange) {
        self.range = range;
    }

    /// Compute the dashboard card figures for a snapshot at `now`.
    ///
    /// The snapshot is ordered newest-first before the windows are selected,
    /// the listing order the recent-activity card expects. Under that order
    /// the all-time comparison window is the most recent half of the record.
    pub fn stats(&self, transactions: &[Transaction], now: OffsetDateTime) -> PeriodStats {
        let mut ordered = transactions.to_vec();
        // Sort by date, and then ID to keep the order stable after updates.
        ordered.sort_by(|a, b| {
            b.transaction_date
                .cmp(&a.transaction_date)
                .then(a.id.cmp(&b.id))
        });

        let windows = select_windows(self.range, &ordered, now);

        summarize(&windows.current, &windows.previous)
    }
}

#[cfg(test)]
mod tests {
    use time::{Duration, OffsetDateTime, macros::datetime};

    use crate::transaction::{TimeRange, Transaction};

    use super::DashboardSelection;

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
    fn seven_day_range_compares_against_the_week_before() {
        let now = datetime!(2024-03-15 12:00 UTC);
        let transactions = vec![
            create_test_transaction(1, 1000, now - Duration::days(1)),
            create_test_transaction(2, 500, now - Duration::days(10)),
        ];
        let mut selection = DashboardSelection::default();
        selection.select_range(TimeRange::SevenDays);

        let got = selection.stats(&transactions, now);

        assert_eq!(1, got.transaction_count);
        assert_eq!(1000, got.total_amount);
        assert_eq!(100.0, got.percent_change);
        assert_eq!(Some(now - Duration::days(1)), got.most_recent_date);
    }

    #[test]
    fn all_time_compares_against_the_most_recent_half() {
        let now = datetime!(2024-03-15 12:00 UTC);
        // Passed oldest-first; the controller reorders newest-first, so the
        // comparison half is the two most recent transactions.
        let transactions = vec![
            create_test_transaction(1, 100, now - Duration::days(40)),
            create_test_transaction(2, 200, now - Duration::days(30)),
            create_test_transaction(3, 300, now - Duration::days(20)),
            create_test_transaction(4, 400, now - Duration::days(10)),
        ];
        let selection = DashboardSelection::default();

        let got = selection.stats(&transactions, now);

        assert_eq!(4, got.transaction_count);
        assert_eq!(1000, got.total_amount);
        assert_eq!((1000.0 - 700.0) / 700.0 * 100.0, got.percent_change);
        assert_eq!(100.0, got.count_change_percent);
        assert_eq!(Some(now - Duration::days(10)), got.most_recent_date);
    }

    #[test]
    fn recent_activity_reflects_the_newest_transaction() {
        let now = datetime!(2024-03-15 12:00 UTC);
        let transactions = vec![
            create_test_transaction(1, 100, now - Duration::days(6)),
            create_test_transaction(2, 100, now - Duration::days(2)),
            create_test_transaction(3, 100, now - Duration::days(4)),
        ];
        let selection = DashboardSelection {
            range: TimeRange::SevenDays,
        };

        let got = selection.stats(&transactions, now);

        assert_eq!(Some(now - Duration::days(2)), got.most_recent_date);
    }
}
