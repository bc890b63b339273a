//! Free-text filtering and stable multi-field sorting for the transaction
//! table.

use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, transaction::JoinedTransaction};

/// The column to sort the transaction table by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    /// The transaction title.
    Title,
    /// The transaction description. Not wired into the comparator table, so
    /// selecting it leaves rows in their incoming order.
    Description,
    /// The transaction amount.
    Amount,
    /// The display name of the source account.
    FromAccount,
    /// The display name of the destination account.
    ToAccount,
    /// The transaction date.
    Date,
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "amount" => Ok(Self::Amount),
            "from-account" => Ok(Self::FromAccount),
            "to-account" => Ok(Self::ToAccount),
            "date" => Ok(Self::Date),
            other => Err(Error::InvalidSortField(other.to_owned())),
        }
    }
}

/// The order to sort transactions in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Sort in order of increasing value.
    #[serde(rename = "asc")]
    Ascending,
    /// Sort in order of decreasing value.
    #[serde(rename = "desc")]
    Descending,
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(Error::InvalidSortOrder(other.to_owned())),
        }
    }
}

/// Filter `rows` by a case-insensitive text search and sort the survivors by
/// `sort_field` in `sort_order`.
///
/// A row is kept when `search_term` is a substring of its title, description
/// or either resolved account name; the empty term matches everything. The
/// sort is stable, so rows the comparator considers equal keep their relative
/// input order in both directions. Descending negates the comparator, which
/// leaves ties untouched.
pub fn query_table<'a>(
    rows: &'a [JoinedTransaction],
    search_term: &str,
    sort_field: SortField,
    sort_order: SortOrder,
) -> Vec<&'a JoinedTransaction> {
    let needle = search_term.to_lowercase();

    let mut matches: Vec<&JoinedTransaction> = rows
        .iter()
        .filter(|row| matches_search(row, &needle))
        .collect();

    matches.sort_by(|a, b| {
        let ordering = compare(a, b, sort_field);
        match sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });

    matches
}

fn matches_search(row: &JoinedTransaction, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    // Unresolved account references match as the empty name.
    row.title.to_lowercase().contains(needle)
        || row
            .description
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
            .contains(needle)
        || row.from_account.name().to_lowercase().contains(needle)
        || row.to_account.name().to_lowercase().contains(needle)
}

fn compare(a: &JoinedTransaction, b: &JoinedTransaction, field: SortField) -> Ordering {
    match field {
        SortField::Title => compare_text(&a.title, &b.title),
        SortField::Description => Ordering::Equal,
        SortField::Amount => a.amount.cmp(&b.amount),
        SortField::FromAccount => compare_text(a.from_account.name(), b.from_account.name()),
        SortField::ToAccount => compare_text(a.to_account.name(), b.to_account.name()),
        SortField::Date => a.transaction_date.cmp(&b.transaction_date),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
