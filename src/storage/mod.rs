//! Storage layer for the bank ledger
//!
//! Provides the flat-file account format, atomic writes, and the
//! [`FileStore`] abstraction the ledger persists through.

pub mod file_io;
pub mod format;
pub mod ledger;
pub mod store;

pub use file_io::{read_text, write_text_atomic};
pub use ledger::Ledger;
pub use store::{DiskStore, FileStore, MemoryStore};
