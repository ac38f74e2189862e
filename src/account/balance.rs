//! Guarded balance arithmetic for the account

use tracing::debug;

use super::types::{Account, Amount};
use crate::error::{BankError, TransactionKind};

/// Deposit / withdraw capability over a non-negative balance
pub trait Ledger {
    /// Add `amount` to the balance. Non-positive amounts are refused.
    fn deposit(&mut self, amount: Amount) -> Result<(), BankError>;

    /// Take `amount` from the balance.
    ///
    /// Returns `Ok(false)` when the balance is too small; that is an
    /// expected outcome, not an error. Non-positive amounts are refused.
    fn withdraw(&mut self, amount: Amount) -> Result<bool, BankError>;

    fn balance(&self) -> Amount;
}

impl Ledger for Account {
    fn deposit(&mut self, amount: Amount) -> Result<(), BankError> {
        if amount <= 0 {
            return Err(BankError::InvalidAmount(TransactionKind::Deposit));
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or(BankError::Overflow { balance: self.balance, amount })?;

        debug!(amount, old = self.balance, new = new_balance, "deposit applied");
        self.balance = new_balance;
        Ok(())
    }

    fn withdraw(&mut self, amount: Amount) -> Result<bool, BankError> {
        if amount <= 0 {
            return Err(BankError::InvalidAmount(TransactionKind::Withdrawal));
        }
        if amount > self.balance {
            debug!(amount, balance = self.balance, "withdrawal exceeds balance");
            return Ok(false);
        }

        self.balance -= amount;
        debug!(amount, new = self.balance, "withdrawal applied");
        Ok(true)
    }

    fn balance(&self) -> Amount {
        self.balance
    }
}
