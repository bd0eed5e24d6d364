//! Transaction CLI commands
//!
//! Deposits, withdrawals and transfers. Each successful command saves the
//! ledger before printing the new balance.

use clap::Subcommand;

use super::{parse_amount, PasswordSource};
use crate::config::Settings;
use crate::error::LedgerResult;
use crate::models::AccountNumber;
use crate::services::BankService;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Deposit cash into an account
    Deposit {
        /// Account number
        number: AccountNumber,
        /// Amount to deposit
        amount: String,
    },
    /// Withdraw cash from an account
    Withdraw {
        /// Account number
        number: AccountNumber,
        /// Amount to withdraw
        amount: String,
    },
    /// Move money to another account
    Transfer {
        /// Source account number
        from: AccountNumber,
        /// Destination account number
        to: AccountNumber,
        /// Amount to transfer
        amount: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    service: &mut BankService<'_>,
    settings: &Settings,
    passwords: &PasswordSource,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        TransactionCommands::Deposit { number, amount } => {
            let amount = parse_amount(&amount)?;
            let password = passwords.get("Password: ")?;

            let balance = service.deposit(number, &password, amount)?;
            service.save()?;

            println!("Deposited {}", amount.format_with_symbol(symbol));
            println!("New Balance: {}", balance.format_with_symbol(symbol));
        }

        TransactionCommands::Withdraw { number, amount } => {
            let amount = parse_amount(&amount)?;
            let password = passwords.get("Password: ")?;

            let balance = service.withdraw(number, &password, amount)?;
            service.save()?;

            println!("Withdrew {}", amount.format_with_symbol(symbol));
            println!("New Balance: {}", balance.format_with_symbol(symbol));
        }

        TransactionCommands::Transfer { from, to, amount } => {
            let amount = parse_amount(&amount)?;
            let password = passwords.get("Password: ")?;

            let balance = service.transfer(from, &password, to, amount)?;
            service.save()?;

            println!(
                "Transferred {} from {} to {}",
                amount.format_with_symbol(symbol),
                from,
                to
            );
            println!("New Balance: {}", balance.format_with_symbol(symbol));
        }
    }

    Ok(())
}
