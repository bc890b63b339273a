//! Defines the library level error type.

/// The errors that may occur in the library.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The ledger export could not be parsed as JSON.
    #[error("could not parse the ledger export: {0}")]
    InvalidImport(String),

    /// The string used to select a time range did not match a known range.
    #[error("invalid time range \"{0}\", expected one of: 7d, 30d, all")]
    InvalidTimeRange(String),

    /// The string used to select a sort column did not match a known column.
    #[error(
        "invalid sort field \"{0}\", expected one of: title, description, amount, from-account, to-account, date"
    )]
    InvalidSortField(String),

    /// The string used to select a sort direction was neither `asc` nor `desc`.
    #[error("invalid sort order \"{0}\", expected one of: asc, desc")]
    InvalidSortOrder(String),
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidImport(error.to_string())
    }
}
