//! Account management for the analytics core.
//!
//! This module contains everything related to accounts:
//! - The `Account` model and the `AccountRef` resolution marker
//! - The name-ascending listing order of the accounts page
//! - The lookup index that joins transactions to account names

mod core;
mod index;

pub use core::{Account, AccountRef, accounts_by_name};
pub use index::AccountIndex;
