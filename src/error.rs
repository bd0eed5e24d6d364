//! Custom error types for the bank ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid input to an operation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Unknown account number or wrong password; the two are reported alike
    #[error("Invalid account number or password")]
    InvalidCredentials,

    /// Insufficient funds
    #[error("Insufficient balance: need {needed}, available {available}")]
    InsufficientFunds { needed: Decimal, available: Decimal },

    /// Malformed persisted data
    #[error("Format error: {0}")]
    Format(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.to_string(),
        }
    }

    /// Create a format error from anything displayable
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    ///
    /// Insufficient funds counts as a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InsufficientFunds { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
