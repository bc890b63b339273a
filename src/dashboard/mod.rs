//! Dashboard module
//!
//! Derives the overview card figures: totals, averages, recent activity and
//! period-over-period changes for a selected time range.

mod overview;
mod stats;

pub use overview::DashboardSelection;
pub use stats::{PeriodStats, summarize};
