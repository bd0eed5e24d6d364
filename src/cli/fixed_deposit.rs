//! Fixed deposit CLI commands

use clap::Subcommand;

use super::{parse_amount, PasswordSource};
use crate::config::Settings;
use crate::display::fixed_deposit::{format_fixed_deposit_list, format_fixed_deposit_opened};
use crate::error::LedgerResult;
use crate::models::fixed_deposit::{describe_tenures, SUPPORTED_TENURES};
use crate::models::AccountNumber;
use crate::services::BankService;

/// Fixed deposit subcommands
#[derive(Subcommand)]
pub enum FixedDepositCommands {
    /// Move part of the balance into a fixed deposit
    Open {
        /// Account number
        number: AccountNumber,
        /// Principal to lock in
        amount: String,
        /// Tenure in months (12 months at 6.5%, 24 months at 7.5%)
        #[arg(short, long, default_value_t = SUPPORTED_TENURES[0], value_parser = parse_tenure)]
        tenure: u32,
    },
    /// List an account's fixed deposits
    List {
        /// Account number
        number: AccountNumber,
    },
}

fn parse_tenure(input: &str) -> Result<u32, String> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|months| SUPPORTED_TENURES.contains(months))
        .ok_or_else(|| format!("tenure must be {} months", describe_tenures()))
}

/// Handle a fixed deposit command
pub fn handle_fixed_deposit_command(
    service: &mut BankService<'_>,
    settings: &Settings,
    passwords: &PasswordSource,
    cmd: FixedDepositCommands,
) -> LedgerResult<()> {
    match cmd {
        FixedDepositCommands::Open {
            number,
            amount,
            tenure,
        } => {
            let amount = parse_amount(&amount)?;
            let password = passwords.get("Password: ")?;

            let deposit = service.open_fixed_deposit(number, &password, amount, tenure)?;
            service.save()?;

            let remaining = service.balance_of(number, &password)?;
            print!(
                "{}",
                format_fixed_deposit_opened(&deposit, remaining, settings)
            );
        }

        FixedDepositCommands::List { number } => {
            let password = passwords.get("Password: ")?;
            let deposits = service.fixed_deposits_of(number, &password)?;
            print!("{}", format_fixed_deposit_list(&deposits, settings));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tenure() {
        assert_eq!(parse_tenure("12"), Ok(12));
        assert_eq!(parse_tenure(" 24 "), Ok(24));
        assert_eq!(parse_tenure("18"), Err("tenure must be 12 or 24 months".to_string()));
        assert!(parse_tenure("twelve").is_err());
    }
}
