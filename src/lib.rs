//! Bank Ledger - a small command-line bank
//!
//! This library provides the core of a single-branch retail bank ledger:
//! customer accounts protected by a password, cash deposits and withdrawals,
//! transfers between accounts, fixed deposits with simple interest, and a
//! flat text file that holds the whole ledger between runs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `crypto`: Password hashing and zeroizing password storage
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, transactions, fixed deposits)
//! - `storage`: The account registry and its flat-file persistence
//! - `services`: Authenticated customer operations
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `bank` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use bank_ledger::models::Money;
//! use bank_ledger::storage::{Ledger, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let mut ledger = Ledger::new();
//! let number = ledger.create_account("Alice", "secret", Money::from_units(1000))?;
//! ledger.login_mut(number, "secret")?.deposit(Money::from_units(250))?;
//! ledger.save(&store, "accounts.dat")?;
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
