//! Core data models for the bank ledger
//!
//! Accounts, the transactions recorded against them, fixed deposits, and the
//! money and account-number value types they are built from.

pub mod account;
pub mod fixed_deposit;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::{Account, MAX_TRANSACTION_HISTORY};
pub use fixed_deposit::{rate_for_tenure, FixedDeposit, SUPPORTED_TENURES};
pub use ids::AccountNumber;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
