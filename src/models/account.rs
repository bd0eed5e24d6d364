//! Account model
//!
//! A holder's balance, the most recent transactions and any fixed deposits.
//! All balance changes go through the methods here so that every change is
//! validated first and recorded with exactly one transaction.

use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

use super::fixed_deposit::FixedDeposit;
use super::ids::AccountNumber;
use super::money::Money;
use super::transaction::{Transaction, TransactionKind};
use crate::crypto::PasswordHasher;
use crate::error::{LedgerError, LedgerResult};
use crate::storage::format::{parse_count, parse_money, parse_number, split_fields};

/// Number of transactions an account remembers
pub const MAX_TRANSACTION_HISTORY: usize = 5;

const TRANSACTIONS_PREFIX: &str = "TRANSACTIONS:";
const FDS_PREFIX: &str = "FDS:";

/// A bank account
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    number: AccountNumber,
    holder_name: String,
    #[serde(skip_serializing)]
    password_hash: String,
    balance: Money,
    /// Oldest first, at most [`MAX_TRANSACTION_HISTORY`] entries
    transactions: VecDeque<Transaction>,
    fixed_deposits: Vec<FixedDeposit>,
}

impl Account {
    /// Open an account, hashing the password once
    ///
    /// A positive initial balance is recorded as an "Initial deposit".
    pub fn open(
        number: AccountNumber,
        holder_name: impl Into<String>,
        password: &str,
        initial_balance: Money,
        hasher: &dyn PasswordHasher,
    ) -> LedgerResult<Self> {
        if initial_balance.is_negative() {
            return Err(LedgerError::Validation(
                "Initial balance cannot be negative".into(),
            ));
        }

        let mut account = Self {
            number,
            holder_name: holder_name.into(),
            password_hash: hasher.hash(password),
            balance: initial_balance,
            transactions: VecDeque::with_capacity(MAX_TRANSACTION_HISTORY + 1),
            fixed_deposits: Vec::new(),
        };

        if initial_balance.is_positive() {
            account.record(TransactionKind::Deposit, initial_balance, "Initial deposit");
        }

        Ok(account)
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Recent transactions, oldest first
    pub fn transactions(&self) -> impl ExactSizeIterator<Item = &Transaction> + '_ {
        self.transactions.iter()
    }

    pub fn fixed_deposits(&self) -> &[FixedDeposit] {
        &self.fixed_deposits
    }

    /// Sum of the principal locked in fixed deposits
    pub fn total_fixed_deposit_principal(&self) -> Money {
        self.fixed_deposits.iter().map(FixedDeposit::principal).sum()
    }

    /// Check a candidate password against the stored hash
    pub fn verify_password(&self, candidate: &str, hasher: &dyn PasswordHasher) -> bool {
        hasher.verify(candidate, &self.password_hash)
    }

    /// Add cash to the balance
    pub fn deposit(&mut self, amount: Money) -> LedgerResult<()> {
        require_positive(amount, "Deposit")?;
        let balance = self.credited(amount, "Deposit")?;

        self.balance = balance;
        self.record(TransactionKind::Deposit, amount, "Cash deposit");
        Ok(())
    }

    /// Take cash from the balance
    pub fn withdraw(&mut self, amount: Money) -> LedgerResult<()> {
        require_positive(amount, "Withdrawal")?;
        let balance = self.debited(amount)?;

        self.balance = balance;
        self.record(TransactionKind::Withdrawal, amount, "Cash withdrawal");
        Ok(())
    }

    /// Move `amount` from the balance into a new fixed deposit
    pub fn open_fixed_deposit(
        &mut self,
        amount: Money,
        tenure_months: u32,
    ) -> LedgerResult<&FixedDeposit> {
        let deposit = FixedDeposit::open(amount, tenure_months)?;
        let balance = self.debited(amount)?;

        self.balance = balance;
        self.record(
            TransactionKind::FdOpen,
            amount,
            format!("FD opened for {} months", tenure_months),
        );
        self.fixed_deposits.push(deposit);

        Ok(&self.fixed_deposits[self.fixed_deposits.len() - 1])
    }

    /// Debit side of a transfer; the ledger has already validated it
    pub(crate) fn transfer_out(&mut self, amount: Money, to: AccountNumber) -> LedgerResult<()> {
        require_positive(amount, "Transfer")?;
        let balance = self.debited(amount)?;

        self.balance = balance;
        self.record(TransactionKind::Transfer, amount, format!("Transfer to {}", to));
        Ok(())
    }

    /// Credit side of a transfer
    pub(crate) fn transfer_in(&mut self, amount: Money, from: AccountNumber) -> LedgerResult<()> {
        require_positive(amount, "Transfer")?;
        let balance = self.credited(amount, "Transfer")?;

        self.balance = balance;
        self.record(
            TransactionKind::Transfer,
            amount,
            format!("Transfer from {}", from),
        );
        Ok(())
    }

    pub(crate) fn require_funds(&self, amount: Money) -> LedgerResult<()> {
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                needed: amount.amount(),
                available: self.balance.amount(),
            });
        }
        Ok(())
    }

    /// Balance after receiving `amount`, checked for overflow
    pub(crate) fn credited(&self, amount: Money, what: &str) -> LedgerResult<Money> {
        self.balance.checked_add(amount).ok_or_else(|| {
            LedgerError::Validation(format!(
                "{} of {} would take account {} past the largest balance",
                what, amount, self.number
            ))
        })
    }

    /// Balance after paying out `amount`, which must be covered
    fn debited(&self, amount: Money) -> LedgerResult<Money> {
        self.require_funds(amount)?;
        self.balance.checked_sub(amount).ok_or_else(|| {
            LedgerError::Validation(format!("cannot take {} from account {}", amount, self.number))
        })
    }

    /// Append a transaction stamped with the current balance
    fn record(&mut self, kind: TransactionKind, amount: Money, description: impl Into<String>) {
        let txn = Transaction::new(kind, amount, self.balance, description);
        self.push_history(txn);
    }

    fn push_history(&mut self, txn: Transaction) {
        self.transactions.push_back(txn);
        if self.transactions.len() > MAX_TRANSACTION_HISTORY {
            self.transactions.pop_front();
        }
    }

    /// Encode the account as a block of lines
    ///
    /// ```text
    /// number|holder|hash|balance
    /// TRANSACTIONS:<n>
    /// ...n transaction lines
    /// FDS:<m>
    /// ...m fixed deposit lines
    /// ```
    pub fn encode(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{}|{}|{}|{}\n",
            self.number,
            self.holder_name,
            self.password_hash,
            self.balance.encode()
        ));

        out.push_str(&format!("{}{}\n", TRANSACTIONS_PREFIX, self.transactions.len()));
        for txn in &self.transactions {
            out.push_str(&txn.encode());
            out.push('\n');
        }

        out.push_str(&format!("{}{}\n", FDS_PREFIX, self.fixed_deposits.len()));
        for fd in &self.fixed_deposits {
            out.push_str(&fd.encode());
            out.push('\n');
        }

        out
    }

    /// Decode a block produced by [`encode`](Self::encode)
    ///
    /// The persisted hash and balance are taken as they are; no initial
    /// deposit is synthesised.
    pub fn decode(block: &str) -> LedgerResult<Self> {
        let mut lines = block.lines();

        let header = lines
            .next()
            .ok_or_else(|| LedgerError::format("empty account block"))?;
        // Fields past the fourth are ignored
        let fields = split_fields(header, "Account", 4, 5)?;

        let number: AccountNumber = parse_number(fields[0], "account number")?;
        if number.next().is_none() {
            return Err(LedgerError::format(format!(
                "account number {} is outside the usable range",
                number
            )));
        }
        let holder_name = fields[1].to_string();
        if holder_name.is_empty() {
            return Err(LedgerError::format(format!(
                "account {} has an empty holder name",
                number
            )));
        }
        let balance = parse_money(fields[3], "balance")?;
        if balance.is_negative() {
            return Err(LedgerError::format(format!(
                "account {} has a negative balance",
                number
            )));
        }

        let mut account = Self {
            number,
            holder_name,
            password_hash: fields[2].to_string(),
            balance,
            transactions: VecDeque::with_capacity(MAX_TRANSACTION_HISTORY + 1),
            fixed_deposits: Vec::new(),
        };

        let count = parse_count(lines.next(), TRANSACTIONS_PREFIX)?;
        for i in 0..count {
            let line = lines.next().ok_or_else(|| {
                LedgerError::format(format!(
                    "account {}: expected {} transaction(s), found {}",
                    number, count, i
                ))
            })?;
            account.push_history(Transaction::decode(line)?);
        }

        let count = parse_count(lines.next(), FDS_PREFIX)?;
        for i in 0..count {
            let line = lines.next().ok_or_else(|| {
                LedgerError::format(format!(
                    "account {}: expected {} fixed deposit(s), found {}",
                    number, count, i
                ))
            })?;
            account.fixed_deposits.push(FixedDeposit::decode(line)?);
        }

        Ok(account)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.holder_name, self.number)
    }
}

fn require_positive(amount: Money, what: &str) -> LedgerResult<()> {
    if !amount.is_positive() {
        return Err(LedgerError::Validation(format!(
            "{} amount must be positive",
            what
        )));
    }
    Ok(())
}
