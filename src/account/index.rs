//! A read-only account lookup index for joining transactions to account
//! names.
//!
//! Account names are on the hot path of both table search and account-name
//! sorting, so the join is a hash index built once per snapshot instead of a
//! linear scan per row.

use std::collections::HashMap;

use crate::{
    account::{Account, AccountRef},
    database_id::AccountId,
    transaction::{JoinedTransaction, Transaction},
};

/// An index of accounts keyed by ID, built once per snapshot.
#[derive(Debug, Clone)]
pub struct AccountIndex<'a> {
    by_id: HashMap<AccountId, &'a Account>,
}

impl<'a> AccountIndex<'a> {
    /// Build an index over `accounts`.
    ///
    /// Duplicate IDs keep the last occurrence; snapshot providers are
    /// expected to supply unique IDs.
    pub fn new(accounts: &'a [Account]) -> Self {
        let by_id = accounts
            .iter()
            .map(|account| (account.id, account))
            .collect();

        Self { by_id }
    }

    /// Look up an account by its ID.
    pub fn get(&self, id: AccountId) -> Option<&'a Account> {
        self.by_id.get(&id).copied()
    }

    /// Join a transaction with the display names of its two accounts.
    ///
    /// A missing account yields [AccountRef::Unknown] in the produced row,
    /// never an error, so one bad reference cannot take down a whole listing.
    /// Callers decide how to surface unknowns.
    pub fn resolve(&self, transaction: &Transaction) -> JoinedTransaction {
        JoinedTransaction {
            id: transaction.id,
            title: transaction.title.clone(),
            description: transaction.description.clone(),
            amount: transaction.amount,
            transaction_date: transaction.transaction_date,
            from_account: self.resolve_reference(transaction.from_account_id),
            to_account: self.resolve_reference(transaction.to_account_id),
        }
    }

    /// Join every transaction in `transactions`, preserving their order.
    pub fn resolve_all(&self, transactions: &[Transaction]) -> Vec<JoinedTransaction> {
        transactions
            .iter()
            .map(|transaction| self.resolve(transaction))
            .collect()
    }

    fn resolve_reference(&self, id: AccountId) -> AccountRef {
        match self.get(id) {
            Some(account) => AccountRef::Known {
                id: account.id,
                name: account.name.clone(),
            },
            None => {
                tracing::debug!("no account with ID {id} in the snapshot");
                AccountRef::Unknown { id }
            }
        }
    }
}
