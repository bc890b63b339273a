//! Defines the core data models for named accounts.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::database_id::AccountId;

/// A named holder of funds that transactions move money between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The ID of the account.
    pub id: AccountId,
    /// The display name of the account. Names are not assumed to be unique.
    pub name: String,
    /// When the account record was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the account record was last updated.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// A resolved reference from a transaction to an account.
///
/// A reference to an account that is missing from the snapshot becomes
/// [AccountRef::Unknown] rather than an error, so the rest of a listing can
/// still be rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AccountRef {
    /// The referenced account was found in the snapshot.
    Known {
        /// The ID of the account.
        id: AccountId,
        /// The display name of the account.
        name: String,
    },
    /// The referenced account is missing from the snapshot.
    Unknown {
        /// The ID the transaction referenced.
        id: AccountId,
    },
}

impl AccountRef {
    /// The display name of the account, or the empty string for an
    /// unresolved reference.
    pub fn name(&self) -> &str {
        match self {
            Self::Known { name, .. } => name,
            Self::Unknown { .. } => "",
        }
    }

    /// The account ID the transaction referenced.
    pub fn id(&self) -> AccountId {
        match self {
            Self::Known { id, .. } | Self::Unknown { id } => *id,
        }
    }

    /// Whether the reference failed to resolve.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}

/// Order accounts by name ascending with the ID as a tiebreak, the order of
/// the accounts listing.
pub fn accounts_by_name(accounts: &[Account]) -> Vec<&Account> {
    let mut sorted: Vec<&Account> = accounts.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    sorted
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::{Account, AccountRef, accounts_by_name};

    fn create_test_account(id: i64, name: &str) -> Account {
        Account {
            id,
            name: name.to_owned(),
            created_at: datetime!(2024-01-01 00:00 UTC),
            updated_at: datetime!(2024-01-01 00:00 UTC),
        }
    }

    #[test]
    fn accounts_by_name_sorts_by_name_then_id() {
        let accounts = vec![
            create_test_account(3, "Savings"),
            create_test_account(2, "Checking"),
            create_test_account(1, "Checking"),
        ];

        let got: Vec<i64> = accounts_by_name(&accounts)
            .iter()
            .map(|account| account.id)
            .collect();

        assert_eq!(vec![1, 2, 3], got);
    }

    #[test]
    fn unknown_reference_has_empty_name() {
        let reference = AccountRef::Unknown { id: 42 };

        assert_eq!("", reference.name());
        assert_eq!(42, reference.id());
        assert!(reference.is_unknown());
    }
}
