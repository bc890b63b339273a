//! Database ID type definitions.

/// Alias for the integer type used for record IDs.
pub type DatabaseId = i64;

/// The ID of an account record.
pub type AccountId = DatabaseId;

/// The ID of a transaction record.
pub type TransactionId = DatabaseId;
