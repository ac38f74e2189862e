//! Account type definitions

/// Monetary amount in whole units
pub type Amount = i64;

/// Identity fields of an account, entered together and replaced together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountDetails {
    pub name: String,
    pub account_number: i64,
    pub account_type: String,
    pub bank_name: String,
    pub ifsc: String,
}

/// The single account managed by a session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Account {
    details: AccountDetails,
    // Only mutated through `Ledger`
    pub(super) balance: Amount,
}

impl Account {
    /// Fresh account: empty fields, zero balance
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite every identity field. No validation is applied.
    pub fn set_details(&mut self, details: AccountDetails) {
        self.details = details;
    }

    pub fn details(&self) -> &AccountDetails {
        &self.details
    }

    /// Multi-line summary of all fields and the current balance
    pub fn describe(&self) -> String {
        let d = &self.details;
        format!(
            "Name: {}\nAccount Number: {}\nType: {}\nBank: {}\nIFSC: {}\nBalance: {}",
            d.name, d.account_number, d.account_type, d.bank_name, d.ifsc, self.balance
        )
    }
}
