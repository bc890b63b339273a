//! Month-grid derivation for the calendar page.

use std::collections::HashMap;

use time::{Date, Month, UtcOffset};

use crate::transaction::Transaction;

/// One day cell of the calendar grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay<'a> {
    /// The calendar date of the cell.
    pub date: Date,
    /// The transactions dated on this day, in input order.
    pub transactions: Vec<&'a Transaction>,
}

/// The month grid of the calendar page.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonth<'a> {
    /// The year of the displayed month.
    pub year: i32,
    /// The displayed month.
    pub month: Month,
    /// Empty leading cells before the first day in a Sunday-first grid.
    pub leading_blanks: u8,
    /// One cell per day of the month, first to last.
    pub days: Vec<CalendarDay<'a>>,
}

impl<'a> CalendarMonth<'a> {
    /// The transactions dated on `date`, empty for dates outside the month.
    ///
    /// Backs the "Transactions for" side panel next to the grid.
    pub fn transactions_on(&self, date: Date) -> &[&'a Transaction] {
        self.days
            .iter()
            .find(|day| day.date == date)
            .map(|day| day.transactions.as_slice())
            .unwrap_or_default()
    }
}

/// Derive the calendar grid for the month containing `anchor`.
///
/// A transaction lands on the cell matching the UTC calendar date of its
/// instant. Transactions outside the anchor's month are simply absent from
/// the grid.
pub fn month_of<'a>(anchor: Date, transactions: &'a [Transaction]) -> CalendarMonth<'a> {
    let year = anchor.year();
    let month = anchor.month();

    let mut by_date: HashMap<Date, Vec<&Transaction>> = HashMap::new();
    for transaction in transactions {
        let date = transaction.transaction_date.to_offset(UtcOffset::UTC).date();
        by_date.entry(date).or_default().push(transaction);
    }

    let first =
        Date::from_calendar_date(year, month, 1).expect("invalid first day of month");

    let days = (1..=last_day_of_month(year, month))
        .map(|day| {
            let date =
                Date::from_calendar_date(year, month, day).expect("invalid calendar date");
            let transactions = by_date.remove(&date).unwrap_or_default();

            CalendarDay { date, transactions }
        })
        .collect();

    CalendarMonth {
        year,
        month,
        leading_blanks: first.weekday().number_days_from_sunday(),
        days,
    }
}

fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
