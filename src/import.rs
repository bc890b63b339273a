//! Parses a JSON ledger export into an in-memory snapshot.
//!
//! The export is a flat array of transaction records that reference accounts
//! by display name. Accounts are derived from the unique names and the
//! records are linked to the derived IDs, reproducing the seed pipeline of
//! the record-keeping app this core serves.

use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    Error,
    account::Account,
    database_id::{AccountId, TransactionId},
    transaction::Transaction,
};

/// The materialized whole-collection snapshot the core computes over.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    /// Every account, in first-seen order.
    pub accounts: Vec<Account>,
    /// Every transaction, in input order.
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportRecord {
    title: String,
    #[serde(default)]
    description: Option<String>,
    amount: i64,
    #[serde(with = "time::serde::rfc3339")]
    transaction_date: OffsetDateTime,
    from_account: String,
    to_account: String,
}

/// Parse a JSON export of transaction records into a [Ledger].
///
/// Accounts are derived from the unique account names in first-seen order
/// and numbered from 1, with both timestamps set to the caller-supplied
/// `now`; transactions are numbered from 1 in input order. Records with an
/// empty title or a blank account name are skipped with a warning, so one
/// bad record never aborts the import.
///
/// # Errors
/// Returns [Error::InvalidImport] when `json` is not a valid export
/// document. This is the only failure mode.
pub fn parse_ledger(json: &str, now: OffsetDateTime) -> Result<Ledger, Error> {
    let records: Vec<ExportRecord> = serde_json::from_str(json)?;

    let mut accounts: Vec<Account> = Vec::new();
    let mut transactions: Vec<Transaction> = Vec::new();
    let mut skipped = 0;

    for record in records {
        if record.title.trim().is_empty()
            || record.from_account.trim().is_empty()
            || record.to_account.trim().is_empty()
        {
            tracing::warn!(
                "skipping export record with blank title or account name: {:?}",
                record.title
            );
            skipped += 1;
            continue;
        }

        let from_account_id = intern_account(&mut accounts, &record.from_account, now);
        let to_account_id = intern_account(&mut accounts, &record.to_account, now);

        transactions.push(Transaction {
            id: transactions.len() as TransactionId + 1,
            title: record.title,
            description: record.description,
            amount: record.amount,
            transaction_date: record.transaction_date,
            from_account_id,
            to_account_id,
        });
    }

    if skipped > 0 {
        tracing::warn!("skipped {skipped} records during import");
    }

    Ok(Ledger {
        accounts,
        transactions,
    })
}

fn intern_account(accounts: &mut Vec<Account>, name: &str, now: OffsetDateTime) -> AccountId {
    if let Some(account) = accounts.iter().find(|account| account.name == name) {
        return account.id;
    }

    let id = accounts.len() as AccountId + 1;
    accounts.push(Account {
        id,
        name: name.to_owned(),
        created_at: now,
        updated_at: now,
    });

    id
}
