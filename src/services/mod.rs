//! Service layer for the bank ledger
//!
//! Authenticated operations on top of the ledger, one call per user action.

pub mod bank;

pub use bank::{AccountSummary, BankService};
