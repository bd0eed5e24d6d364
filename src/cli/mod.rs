//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod fixed_deposit;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use fixed_deposit::{handle_fixed_deposit_command, FixedDepositCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::crypto::SecureString;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

/// Where command handlers get the account password from
///
/// A password given on the command line (or through `BANK_PASSWORD`) is used
/// as is; otherwise the user is prompted without echo.
pub struct PasswordSource {
    provided: Option<SecureString>,
}

impl PasswordSource {
    pub fn new(provided: Option<String>) -> Self {
        Self {
            provided: provided.map(SecureString::new),
        }
    }

    /// Get the password, prompting with `prompt` if none was provided
    pub fn get(&self, prompt: &str) -> LedgerResult<SecureString> {
        if let Some(password) = &self.provided {
            return Ok(SecureString::new(password.as_str()));
        }

        rpassword::prompt_password(prompt)
            .map(SecureString::new)
            .map_err(|e| LedgerError::Io(format!("Failed to read password: {}", e)))
    }
}

/// Parse a user-entered amount
pub(crate) fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '1000.50' or '1000'. Error: {}",
            input, e
        ))
    })
}
