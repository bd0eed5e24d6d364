//! Account CLI commands
//!
//! Implements CLI commands for opening accounts and viewing them.

use clap::Subcommand;

use super::{parse_amount, PasswordSource};
use crate::config::Settings;
use crate::display::account::{format_account_details, format_balance};
use crate::display::transaction::format_transaction_history;
use crate::error::LedgerResult;
use crate::models::AccountNumber;
use crate::services::BankService;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Open a new account
    Create {
        /// Account holder name
        name: String,
        /// Initial balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0")]
        balance: String,
    },
    /// Show account details
    Show {
        /// Account number
        number: AccountNumber,
    },
    /// Show the current balance
    Balance {
        /// Account number
        number: AccountNumber,
    },
    /// Show the most recent transactions
    History {
        /// Account number
        number: AccountNumber,
    },
}

/// Handle an account command
pub fn handle_account_command(
    service: &mut BankService<'_>,
    settings: &Settings,
    passwords: &PasswordSource,
    cmd: AccountCommands,
) -> LedgerResult<()> {
    match cmd {
        AccountCommands::Create { name, balance } => {
            let initial_balance = parse_amount(&balance)?;
            let password = passwords.get("Choose a password: ")?;

            let number = service.create_account(&name, &password, initial_balance)?;
            service.save()?;

            println!("Account created successfully!");
            println!("  Account Number: {}", number);
            println!("  Holder:         {}", name.trim());
            println!(
                "  Balance:        {}",
                initial_balance.format_with_symbol(&settings.currency_symbol)
            );
        }

        AccountCommands::Show { number } => {
            let password = passwords.get("Password: ")?;
            let summary = service.account_details_of(number, &password)?;
            print!("{}", format_account_details(&summary, settings));
        }

        AccountCommands::Balance { number } => {
            let password = passwords.get("Password: ")?;
            let summary = service.login(number, &password)?;
            println!("{}", format_balance(&summary, settings));
        }

        AccountCommands::History { number } => {
            let password = passwords.get("Password: ")?;
            let history = service.transaction_history_of(number, &password)?;
            print!("{}", format_transaction_history(&history, settings));
        }
    }

    Ok(())
}
