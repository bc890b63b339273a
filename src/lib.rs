//! Ledgerboard is the analytics core of a record-keeping app for financial
//! transfers between named accounts.
//!
//! It derives the dashboard's period-over-period statistics, the searchable
//! and sortable transaction table and the calendar grid from an in-memory
//! snapshot of transactions and accounts. Persistence and presentation are
//! the caller's concern. Every operation is a pure function of its inputs;
//! the reference instant `now` is always an explicit argument, never read
//! from a clock.

#![warn(missing_docs)]

mod account;
mod calendar;
mod dashboard;
mod database_id;
mod error;
mod import;
mod transaction;

pub use account::{Account, AccountIndex, AccountRef, accounts_by_name};
pub use calendar::{CalendarDay, CalendarMonth, month_of};
pub use dashboard::{DashboardSelection, PeriodStats, summarize};
pub use database_id::{AccountId, DatabaseId, TransactionId};
pub use error::Error;
pub use import::{Ledger, parse_ledger};
pub use transaction::{
    JoinedTransaction, SortField, SortOrder, TableSelection, TimeRange, Transaction,
    WindowSelection, query_table, select_windows,
};
