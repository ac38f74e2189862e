use std::fmt;

use thiserror::Error;

/// Which side of the ledger an amount was offered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BankError {
    #[error("{0} amount must be greater than zero.")]
    InvalidAmount(TransactionKind),
    #[error("Balance overflow: cannot add {amount} to {balance}")]
    Overflow { balance: i64, amount: i64 },
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("input stream closed")]
    Closed,
    #[error("Read error: {0}")]
    Io(#[from] std::io::Error),
}

impl BankError {
    /// True when no further input can ever arrive.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, BankError::Input(InputError::Closed))
    }

    /// The input source returned an I/O error other than end of input.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, BankError::Input(InputError::Io(_)))
    }
}
