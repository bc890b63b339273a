//! Transaction management for the analytics core.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` and `JoinedTransaction` models
//! - Time-window selection for the dashboard's period comparison
//! - The free-text filter and stable multi-field sort behind the table
//! - The table's caller-held search and sort selection

mod core;
mod query;
mod table;
mod window;

pub use core::{JoinedTransaction, Transaction};
pub use query::{SortField, SortOrder, query_table};
pub use table::TableSelection;
pub use window::{TimeRange, WindowSelection, select_windows};
