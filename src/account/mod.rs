//! Account module for the bank console
//!
//! This module holds the single account record and the arithmetic that
//! guards its balance:
//! - Identity fields, overwritten wholesale by `set_details`
//! - Deposit / withdraw with the `balance >= 0` invariant

pub mod types;
pub mod balance;

pub use types::{Account, AccountDetails, Amount};
pub use balance::Ledger;
