//! Password handling for the bank ledger
//!
//! One-way password hashing for stored credentials and zeroizing storage for
//! passwords typed at the terminal.

pub mod password;
pub mod secure_memory;

pub use password::{PasswordHasher, Sha256Hasher};
pub use secure_memory::SecureString;
