/// Interactive Bank Menu - capture details, deposit, withdraw, display
use std::io::Write;

use tracing::{debug, info, warn};

use crate::account::{Account, AccountDetails, Ledger};
use crate::config::BankConfig;
use crate::error::BankError;
use crate::input::InputSource;
use crate::transaction::TransactionHandler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EnterDetails,
    Deposit,
    Withdraw,
    Display,
    Exit,
    Invalid(i64),
}

impl From<i64> for MenuChoice {
    fn from(n: i64) -> Self {
        match n {
            1 => MenuChoice::EnterDetails,
            2 => MenuChoice::Deposit,
            3 => MenuChoice::Withdraw,
            4 => MenuChoice::Display,
            5 => MenuChoice::Exit,
            other => MenuChoice::Invalid(other),
        }
    }
}

/// Back-to-back read errors tolerated before the session gives up
pub const MAX_READ_FAILURES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Exited,
}

pub struct BankMenu<I, W> {
    input: I,
    out: W,
    title: String,
}

impl<I: InputSource, W: Write> BankMenu<I, W> {
    pub fn new(input: I, out: W, config: &BankConfig) -> Self {
        Self {
            input,
            out,
            title: config.menu_title.clone(),
        }
    }

    /// Run until the user exits or input runs dry. Failures inside an
    /// iteration are printed and the menu comes back, unless reading keeps
    /// failing `MAX_READ_FAILURES` times in a row.
    pub fn run(&mut self, account: &mut Account) {
        info!("bank session started");
        let mut state = MenuState::Running;
        let mut read_failures = 0;

        while state == MenuState::Running {
            state = match self.step(account) {
                Ok(next) => {
                    read_failures = 0;
                    next
                }
                Err(e) if e.is_input_closed() => {
                    info!("input closed, leaving menu");
                    self.farewell("Input closed. Exiting...");
                    MenuState::Exited
                }
                Err(e) => {
                    warn!("menu iteration failed: {}", e);
                    if e.is_read_failure() {
                        read_failures += 1;
                    } else {
                        read_failures = 0;
                    }

                    // Nowhere left to report to
                    if writeln!(self.out, "An unexpected error occurred: {}", e).is_err() {
                        MenuState::Exited
                    } else if read_failures >= MAX_READ_FAILURES {
                        warn!(read_failures, "input keeps failing, leaving menu");
                        self.farewell("Input unavailable. Exiting...");
                        MenuState::Exited
                    } else {
                        MenuState::Running
                    }
                }
            };
        }

        info!(balance = account.balance(), "bank session ended");
    }

    /// Last line of a session; the writer is flushed since nothing follows.
    fn farewell(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            warn!("could not write final line: {}", e);
        }
    }

    /// One pass: show the menu, read a choice, dispatch it.
    pub fn step(&mut self, account: &mut Account) -> Result<MenuState, BankError> {
        self.print_menu()?;

        let choice = MenuChoice::from(self.input.read_int("Choose an option:")?);
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::EnterDetails => self.handle_account_details(account)?,
            MenuChoice::Deposit => self.handle_deposit(account)?,
            MenuChoice::Withdraw => self.handle_withdrawal(account)?,
            MenuChoice::Display => writeln!(self.out, "{}", account.describe())?,
            MenuChoice::Exit => {
                writeln!(self.out, "Exiting...")?;
                self.out.flush()?;
                return Ok(MenuState::Exited);
            }
            MenuChoice::Invalid(_) => writeln!(self.out, "Invalid choice. Please try again.")?,
        }

        self.out.flush()?;
        Ok(MenuState::Running)
    }

    pub fn into_parts(self) -> (I, W) {
        (self.input, self.out)
    }

    fn print_menu(&mut self) -> Result<(), BankError> {
        writeln!(self.out, "\n{}", self.title)?;
        writeln!(self.out, "1. Enter Account Details")?;
        writeln!(self.out, "2. Deposit Money")?;
        writeln!(self.out, "3. Withdraw Money")?;
        writeln!(self.out, "4. Display Account Details")?;
        writeln!(self.out, "5. Exit")?;
        self.out.flush()?;
        Ok(())
    }

    fn handle_account_details(&mut self, account: &mut Account) -> Result<(), BankError> {
        let name = self.input.read_string("Enter Name:")?;
        let account_number = self.input.read_int("Enter Account Number:")?;
        let account_type = self.input.read_string("Enter Account Type:")?;
        let bank_name = self.input.read_string("Enter Bank Name:")?;
        let ifsc = self.input.read_string("Enter IFSC:")?;

        account.set_details(AccountDetails {
            name,
            account_number,
            account_type,
            bank_name,
            ifsc,
        });
        info!(account_number, "account details saved");
        writeln!(self.out, "Account details saved successfully.")?;
        Ok(())
    }

    fn handle_deposit(&mut self, account: &mut Account) -> Result<(), BankError> {
        let amount = self.input.read_int("Enter Deposit Amount:")?;
        let mut handler = TransactionHandler::new(account);
        handler.deposit(amount, &mut self.out)?;
        // Printed even after a refused amount, matching the classic console
        writeln!(self.out, "Deposit successful. New Balance: {}", handler.balance())?;
        Ok(())
    }

    fn handle_withdrawal(&mut self, account: &mut Account) -> Result<(), BankError> {
        let amount = self.input.read_int("Enter Withdrawal Amount:")?;
        let mut handler = TransactionHandler::new(account);
        if handler.withdraw(amount, &mut self.out)? {
            writeln!(self.out, "Withdrawal successful. Remaining Balance: {}", handler.balance())?;
        } else {
            writeln!(self.out, "Insufficient balance. Transaction failed.")?;
        }
        Ok(())
    }
}
