/// Transaction handler - forwards to the ledger and reports refused amounts
use std::io::Write;

use tracing::warn;

use crate::account::{Amount, Ledger};
use crate::error::BankError;

pub struct TransactionHandler<'a, L: Ledger> {
    ledger: &'a mut L,
}

impl<'a, L: Ledger> TransactionHandler<'a, L> {
    pub fn new(ledger: &'a mut L) -> Self {
        Self { ledger }
    }

    /// Deposit, printing `Error: ...` to `out` if the ledger refuses.
    /// A refusal is reported, never returned; only a failing `out` is.
    pub fn deposit<W: Write>(&mut self, amount: Amount, out: &mut W) -> std::io::Result<()> {
        if let Err(e) = self.ledger.deposit(amount) {
            report(out, &e)?;
        }
        Ok(())
    }

    /// Withdraw, returning whether money actually left the account.
    pub fn withdraw<W: Write>(&mut self, amount: Amount, out: &mut W) -> std::io::Result<bool> {
        match self.ledger.withdraw(amount) {
            Ok(done) => Ok(done),
            Err(e) => {
                report(out, &e)?;
                Ok(false)
            }
        }
    }

    pub fn balance(&self) -> Amount {
        self.ledger.balance()
    }
}

fn report<W: Write>(out: &mut W, e: &BankError) -> std::io::Result<()> {
    warn!("transaction refused: {}", e);
    writeln!(out, "Error: {}", e)
}
