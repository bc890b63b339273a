//! Defines the core data models for transfers between accounts.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    account::AccountRef,
    database_id::{AccountId, TransactionId},
};

/// A transfer of money from one account to another.
///
/// Amounts are integer minor currency units (cents) in a single implicit
/// currency. Self-transfers, where both sides reference the same account,
/// are permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A short human-readable label for the transfer.
    pub title: String,
    /// A longer text description of what the transfer was for.
    pub description: Option<String>,
    /// The amount of money moved, in minor currency units.
    pub amount: i64,
    /// When the transfer happened.
    #[serde(with = "time::serde::rfc3339")]
    pub transaction_date: OffsetDateTime,
    /// The account the money came from.
    pub from_account_id: AccountId,
    /// The account the money went to.
    pub to_account_id: AccountId,
}

/// A transaction with its two account references resolved to display names.
///
/// Produced by [crate::AccountIndex::resolve] and consumed by the table's
/// text search and account-name sorting.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedTransaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A short human-readable label for the transfer.
    pub title: String,
    /// A longer text description of what the transfer was for.
    pub description: Option<String>,
    /// The amount of money moved, in minor currency units.
    pub amount: i64,
    /// When the transfer happened.
    pub transaction_date: OffsetDateTime,
    /// The resolved source account.
    pub from_account: AccountRef,
    /// The resolved destination account.
    pub to_account: AccountRef,
}
