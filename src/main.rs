use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_bank::account::Account;
use rust_bank::cli::Cli;
use rust_bank::config::BankConfig;
use rust_bank::input::ConsoleInput;
use rust_bank::interactive::BankMenu;

fn main() {
    let cli = match Cli::parse_lenient(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            // --help ends the run normally
            let _ = e.print();
            return;
        }
    };

    let mut config = BankConfig::load_or_default(cli.config.as_deref());
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // Logs go to stderr; stdout carries the menu protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    info!(title = %config.menu_title, "starting bank console");

    let mut account = Account::new();
    let mut menu = BankMenu::new(ConsoleInput::stdio(), io::stdout(), &config);
    menu.run(&mut account);
}
