//! Strongly-typed account numbers
//!
//! Account numbers are plain integers on the wire, but wrapping them keeps
//! them from being mixed up with amounts or counts at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Number identifying an account within a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(u32);

impl AccountNumber {
    /// The first number a fresh ledger hands out
    pub const FIRST: AccountNumber = AccountNumber(1001);

    /// Wrap a raw account number
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw number
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// The number following this one, or `None` at the end of the range
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl Default for AccountNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AccountNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for AccountNumber {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
