//! The transaction table's caller-held search and sort selection.

use crate::transaction::{JoinedTransaction, SortField, SortOrder, query_table};

/// The search and sort state of the transaction table.
///
/// The table engine itself is the pure [query_table] function; this struct is
/// the ordinary state a controller holds between interactions and re-applies
/// on every recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSelection {
    /// Free-text filter over titles, descriptions and account names.
    pub search_term: String,
    /// The active sort column.
    pub sort_field: SortField,
    /// The active sort direction.
    pub sort_order: SortOrder,
}

impl Default for TableSelection {
    /// A fresh table: no filter, newest transactions first.
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_field: SortField::Date,
            sort_order: SortOrder::Descending,
        }
    }
}

impl TableSelection {
    /// Replace the search term.
    pub fn set_search(&mut self, search_term: &str) {
        self.search_term = search_term.to_owned();
    }

    /// Select `field` ascending, or flip the direction when `field` is
    /// already the active column.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = match self.sort_order {
                SortOrder::Ascending => SortOrder::Descending,
                SortOrder::Descending => SortOrder::Ascending,
            };
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Ascending;
        }
    }

    /// Apply the held selection to a set of joined rows.
    pub fn apply<'a>(&self, rows: &'a [JoinedTransaction]) -> Vec<&'a JoinedTransaction> {
        query_table(rows, &self.search_term, self.sort_field, self.sort_order)
    }
}
