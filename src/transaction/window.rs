//! Time-window selection for the dashboard's period comparisons.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::{Error, transaction::Transaction};

/// A named span of recent history for the dashboard's period comparison.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    /// The last seven days.
    #[serde(rename = "7d")]
    SevenDays,
    /// The last thirty days.
    #[serde(rename = "30d")]
    ThirtyDays,
    /// Every transaction on record. The dashboard opens on this range.
    #[default]
    #[serde(rename = "all")]
    AllTime,
}

impl TimeRange {
    /// The token used for this range in query strings and CLI flags.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
            Self::AllTime => "all",
        }
    }

    /// The human-readable label of the range switcher.
    pub fn label(self) -> &'static str {
        match self {
            Self::SevenDays => "Last 7 days",
            Self::ThirtyDays => "Last 30 days",
            Self::AllTime => "All-time",
        }
    }

    fn days(self) -> Option<i64> {
        match self {
            Self::SevenDays => Some(7),
            Self::ThirtyDays => Some(30),
            Self::AllTime => None,
        }
    }
}

impl FromStr for TimeRange {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "7d" => Ok(Self::SevenDays),
            "30d" => Ok(Self::ThirtyDays),
            "all" => Ok(Self::AllTime),
            other => Err(Error::InvalidTimeRange(other.to_owned())),
        }
    }
}

/// The current window and its comparison window over a transaction slice.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSelection<'a> {
    /// Transactions inside the selected range.
    pub current: Vec<&'a Transaction>,
    /// Transactions in the span of equal length immediately before the
    /// selected range.
    pub previous: Vec<&'a Transaction>,
}

/// Split `transactions` into the current window for `range` and the
/// comparison window immediately before it.
///
/// The day-based ranges use half-open boundaries: `current` holds
/// transactions strictly after `now - N days` and `previous` holds those in
/// `(now - 2N days, now - N days]`, so the two windows are disjoint,
/// contiguous and of equal span. A transaction dated exactly at the cutoff
/// lands in `previous`.
///
/// The all-time comparison window is the first half of the input by index,
/// not by time; callers that pass newest-first order compare against the
/// most recent half. Relative input order is preserved in both windows, and
/// `now` is always an explicit argument so the selection is deterministic.
pub fn select_windows<'a>(
    range: TimeRange,
    transactions: &'a [Transaction],
    now: OffsetDateTime,
) -> WindowSelection<'a> {
    match range.days() {
        Some(days) => {
            let cutoff = now - Duration::days(days);
            let previous_cutoff = now - Duration::days(2 * days);

            let current = transactions
                .iter()
                .filter(|transaction| transaction.transaction_date > cutoff)
                .collect();
            let previous = transactions
                .iter()
                .filter(|transaction| {
                    transaction.transaction_date > previous_cutoff
                        && transaction.transaction_date <= cutoff
                })
                .collect();

            WindowSelection { current, previous }
        }
        None => {
            let current: Vec<&Transaction> = transactions.iter().collect();
            let previous = current[..transactions.len() / 2].to_vec();

            WindowSelection { current, previous }
        }
    }
}
