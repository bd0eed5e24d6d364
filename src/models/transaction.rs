//! Transaction model
//!
//! An immutable record of one balance-affecting event on an account. Each
//! transaction carries a snapshot of the account balance right after it.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};
use crate::storage::format::{parse_money, parse_number, parse_timestamp, split_fields};

/// Kind of balance-affecting event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Cash paid into the account
    Deposit,
    /// Cash taken out of the account
    Withdrawal,
    /// Funds moved from the balance into a fixed deposit
    FdOpen,
    /// Funds returned from a matured fixed deposit
    FdMaturity,
    /// Funds moved between two accounts
    Transfer,
}

impl TransactionKind {
    /// Ordinal used in the persisted file
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Deposit => 0,
            Self::Withdrawal => 1,
            Self::FdOpen => 2,
            Self::FdMaturity => 3,
            Self::Transfer => 4,
        }
    }

    /// Reverse of [`ordinal`](Self::ordinal)
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Deposit),
            1 => Some(Self::Withdrawal),
            2 => Some(Self::FdOpen),
            3 => Some(Self::FdMaturity),
            4 => Some(Self::Transfer),
            _ => None,
        }
    }

    /// Short label for register views
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdrawal => "WITHDRAWAL",
            Self::FdOpen => "FD OPEN",
            Self::FdMaturity => "FD MATURITY",
            Self::Transfer => "TRANSFER",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "DEPOSIT"),
            Self::Withdrawal => write!(f, "WITHDRAWAL"),
            Self::FdOpen => write!(f, "FD_OPEN"),
            Self::FdMaturity => write!(f, "FD_MATURITY"),
            Self::Transfer => write!(f, "TRANSFER"),
        }
    }
}

/// A recorded balance-affecting event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Money,
    balance_after: Money,
    timestamp: DateTime<Utc>,
    #[serde(default)]
    description: String,
}

impl Transaction {
    /// Record an event that happened now
    ///
    /// The timestamp is truncated to whole seconds, the precision the file
    /// format keeps.
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        balance_after: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount,
            balance_after,
            timestamp: Utc::now().trunc_subsecs(0),
            description: description.into(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Account balance immediately after this event
    pub fn balance_after(&self) -> Money {
        self.balance_after
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Encode as one `kind|amount|balance_after|unix_ts|description` line
    pub fn encode(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.kind.ordinal(),
            self.amount.encode(),
            self.balance_after.encode(),
            self.timestamp.timestamp(),
            self.description
        )
    }

    /// Decode a line produced by [`encode`](Self::encode)
    ///
    /// The description is optional and defaults to empty.
    pub fn decode(line: &str) -> LedgerResult<Self> {
        let fields = split_fields(line, "Transaction", 4, 5)?;

        let ordinal: u8 = parse_number(fields[0], "transaction type")?;
        let kind = TransactionKind::from_ordinal(ordinal).ok_or_else(|| {
            LedgerError::format(format!("unknown transaction type: {}", ordinal))
        })?;

        Ok(Self {
            kind,
            amount: parse_money(fields[1], "transaction amount")?,
            balance_after: parse_money(fields[2], "balance after")?,
            timestamp: parse_timestamp(fields[3], "transaction timestamp")?,
            description: fields.get(4).map(|d| d.to_string()).unwrap_or_default(),
        })
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<11} | {} | Balance: {}",
            self.kind.label(),
            self.amount,
            self.balance_after
        )?;
        if !self.description.is_empty() {
            write!(f, " | {}", self.description)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            TransactionKind::Deposit,
            Money::from_units(500),
            Money::from_units(1500),
            "Cash deposit",
        );
        assert_eq!(txn.kind(), TransactionKind::Deposit);
        assert_eq!(txn.amount(), Money::from_units(500));
        assert_eq!(txn.balance_after(), Money::from_units(1500));
        assert_eq!(txn.description(), "Cash deposit");
        assert_eq!(txn.timestamp().timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_ordinals() {
        for kind in [
            TransactionKind::Deposit,
            TransactionKind::Withdrawal,
            TransactionKind::FdOpen,
            TransactionKind::FdMaturity,
            TransactionKind::Transfer,
        ] {
            assert_eq!(TransactionKind::from_ordinal(kind.ordinal()), Some(kind));
        }
        assert_eq!(TransactionKind::FdOpen.ordinal(), 2);
        assert_eq!(TransactionKind::from_ordinal(9), None);
    }

    #[test]
    fn test_encode_format() {
        let txn = Transaction::new(
            TransactionKind::Withdrawal,
            Money::from_cents(25050),
            Money::from_units(750),
            "Cash withdrawal",
        );
        let line = txn.encode();
        assert_eq!(
            line,
            format!("1|250.5|750|{}|Cash withdrawal", txn.timestamp().timestamp())
        );
        assert_eq!(Transaction::decode(&line).unwrap(), txn);
    }

    #[test]
    fn test_decode_without_description() {
        let txn = Transaction::decode("0|100|100|1700000000").unwrap();
        assert_eq!(txn.kind(), TransactionKind::Deposit);
        assert_eq!(txn.description(), "");
        assert_eq!(txn.timestamp().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_decode_description_with_pipe() {
        let txn = Transaction::decode("4|10|90|1700000000|rent | march").unwrap();
        assert_eq!(txn.kind(), TransactionKind::Transfer);
        assert_eq!(txn.description(), "rent | march");
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(
            Transaction::decode("0|100|100"),
            Err(LedgerError::Format(_))
        ));
        assert!(Transaction::decode("7|100|100|1700000000").is_err());
        assert!(Transaction::decode("0|abc|100|1700000000").is_err());
        assert!(Transaction::decode("0|100|100|yesterday").is_err());
    }

    #[test]
    fn test_display() {
        let txn = Transaction::decode("2|5000|1000|1700000000|FD opened for 12 months").unwrap();
        assert_eq!(
            txn.to_string(),
            "FD OPEN     | 5000.00 | Balance: 1000.00 | FD opened for 12 months"
        );
    }
}
