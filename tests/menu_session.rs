use std::io::{self, Cursor};

use rust_bank::account::{Account, Ledger};
use rust_bank::config::BankConfig;
use rust_bank::input::ConsoleInput;
use rust_bank::interactive::BankMenu;

fn run_script(script: &str) -> (Account, String, String) {
    let mut account = Account::new();
    let input = ConsoleInput::new(Cursor::new(script), Vec::new());
    let mut menu = BankMenu::new(input, Vec::new(), &BankConfig::default());
    menu.run(&mut account);

    let (input, out) = menu.into_parts();
    let (_, prompts) = input.into_parts();
    (
        account,
        String::from_utf8(out).unwrap(),
        String::from_utf8(prompts).unwrap(),
    )
}

#[test]
fn full_session() {
    let script = concat!(
        "1\n", "Ravi Kumar\n", "not-a-number\n", "123456\n", "Savings\n", "State Bank\n", "SBIN0001234\n",
        "2\n", "500\n",
        "3\n", "200\n",
        "3\n", "1000\n",
        "2\n", "-5\n",
        "7\n",
        "4\n",
        "5\n",
    );
    let (account, out, prompts) = run_script(script);

    assert_eq!(account.balance(), 300);
    assert_eq!(account.details().account_number, 123456);
    assert_eq!(account.details().ifsc, "SBIN0001234");

    assert!(out.contains("Account details saved successfully.\n"));
    assert!(out.contains("Deposit successful. New Balance: 500\n"));
    assert!(out.contains("Withdrawal successful. Remaining Balance: 300\n"));
    assert!(out.contains("Insufficient balance. Transaction failed.\n"));
    assert!(out.contains("Error: Deposit amount must be greater than zero.\n"));
    assert!(out.contains("Invalid choice. Please try again.\n"));
    assert!(out.contains(
        "Name: Ravi Kumar\nAccount Number: 123456\nType: Savings\nBank: State Bank\nIFSC: SBIN0001234\nBalance: 300\n"
    ));
    assert!(out.ends_with("Exiting...\n"));

    // The bad account number costs one extra prompt
    assert_eq!(prompts.matches("Invalid input. Please enter a valid number.").count(), 1);
    assert_eq!(prompts.matches("Choose an option:").count(), 8);
    assert!(prompts.contains("Enter Name:\nEnter Account Number:\n"));
}

#[test]
fn non_numeric_choice_reprompts() {
    let (_, out, prompts) = run_script("menu\n5\n");
    assert_eq!(prompts, "Choose an option:\nInvalid input. Please enter a valid number.\n");
    assert_eq!(out.matches("--- Bank Menu ---").count(), 1);
    assert!(out.ends_with("Exiting...\n"));
}

#[test]
fn empty_input_exits_cleanly() {
    let mut account = Account::new();
    let input = ConsoleInput::new(Cursor::new(""), io::sink());
    let mut menu = BankMenu::new(input, Vec::new(), &BankConfig::default());
    menu.run(&mut account);
    let (_, out) = menu.into_parts();
    assert!(String::from_utf8(out).unwrap().ends_with("Input closed. Exiting...\n"));
}
