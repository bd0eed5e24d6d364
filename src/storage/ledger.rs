//! The account registry
//!
//! Owns every account keyed by account number, hands out new numbers, checks
//! logins, and reads/writes the whole collection as one text file:
//!
//! ```text
//! NEXT_ACCOUNT:<n>
//! ACCOUNT_COUNT:<n>
//! ---ACCOUNTS---
//! ACCOUNT_START
//! <account block>
//! ACCOUNT_END
//! ```

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, info, warn};

use crate::crypto::{PasswordHasher, Sha256Hasher};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountNumber, Money};

use super::format::FIELD_SEPARATOR;
use super::store::FileStore;

const NEXT_ACCOUNT_PREFIX: &str = "NEXT_ACCOUNT:";
const ACCOUNT_COUNT_PREFIX: &str = "ACCOUNT_COUNT:";
const ACCOUNTS_SEPARATOR: &str = "---ACCOUNTS---";
const ACCOUNT_START: &str = "ACCOUNT_START";
const ACCOUNT_END: &str = "ACCOUNT_END";

/// Shortest password accepted for a new account, in characters
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Registry of all accounts
pub struct Ledger {
    accounts: BTreeMap<AccountNumber, Account>,
    next_account_number: AccountNumber,
    hasher: Box<dyn PasswordHasher>,
    skipped_on_load: usize,
}

impl Ledger {
    /// Create an empty ledger using SHA-256 password hashes
    pub fn new() -> Self {
        Self::with_hasher(Box::new(Sha256Hasher))
    }

    /// Create an empty ledger with a custom password hasher
    pub fn with_hasher(hasher: Box<dyn PasswordHasher>) -> Self {
        Self {
            accounts: BTreeMap::new(),
            next_account_number: AccountNumber::FIRST,
            hasher,
            skipped_on_load: 0,
        }
    }

    /// Number the next created account will get
    pub fn next_account_number(&self) -> AccountNumber {
        self.next_account_number
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All accounts in account-number order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> + '_ {
        self.accounts.values()
    }

    pub fn hasher(&self) -> &dyn PasswordHasher {
        self.hasher.as_ref()
    }

    /// Corrupt account blocks dropped by the last load
    pub fn skipped_on_load(&self) -> usize {
        self.skipped_on_load
    }

    /// Open a new account and return its number
    ///
    /// Nothing is created, and no number is used up, when validation fails.
    pub fn create_account(
        &mut self,
        name: &str,
        password: &str,
        initial_balance: Money,
    ) -> LedgerResult<AccountNumber> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation(
                "Account holder name cannot be empty".into(),
            ));
        }
        if name.contains(FIELD_SEPARATOR) || name.contains(['\n', '\r']) {
            return Err(LedgerError::Validation(format!(
                "Account holder name cannot contain '{}' or line breaks",
                FIELD_SEPARATOR
            )));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(LedgerError::Validation(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )));
        }
        if initial_balance.is_negative() {
            return Err(LedgerError::Validation(
                "Initial balance cannot be negative".into(),
            ));
        }

        let number = self.next_account_number;
        let following = number.next().ok_or_else(|| {
            LedgerError::Validation("No account numbers left to assign".into())
        })?;
        let account = Account::open(number, name, password, initial_balance, self.hasher.as_ref())?;
        self.next_account_number = following;
        self.accounts.insert(number, account);

        info!("Created account {} for {}", number, name);
        Ok(number)
    }

    /// Authenticate and borrow an account
    ///
    /// Unknown numbers and wrong passwords produce the same error.
    pub fn login(&self, number: AccountNumber, password: &str) -> LedgerResult<&Account> {
        match self.accounts.get(&number) {
            Some(account) if account.verify_password(password, self.hasher.as_ref()) => Ok(account),
            found => {
                log_failed_login(number, found.is_some());
                Err(LedgerError::InvalidCredentials)
            }
        }
    }

    /// Authenticate and borrow an account mutably
    pub fn login_mut(
        &mut self,
        number: AccountNumber,
        password: &str,
    ) -> LedgerResult<&mut Account> {
        let hasher = self.hasher.as_ref();
        match self.accounts.get_mut(&number) {
            Some(account) if account.verify_password(password, hasher) => Ok(account),
            found => {
                log_failed_login(number, found.is_some());
                Err(LedgerError::InvalidCredentials)
            }
        }
    }

    pub fn lookup(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    pub fn lookup_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.get_mut(&number)
    }

    pub fn exists(&self, number: AccountNumber) -> bool {
        self.accounts.contains_key(&number)
    }

    /// Move funds between two accounts
    ///
    /// Every check runs before either balance changes.
    pub fn transfer(
        &mut self,
        from: AccountNumber,
        to: AccountNumber,
        amount: Money,
    ) -> LedgerResult<()> {
        if from == to {
            return Err(LedgerError::Validation(
                "Cannot transfer to the same account".into(),
            ));
        }
        if !amount.is_positive() {
            return Err(LedgerError::Validation(
                "Transfer amount must be positive".into(),
            ));
        }
        self.accounts
            .get(&to)
            .ok_or_else(|| LedgerError::account_not_found(to))?
            .credited(amount, "Transfer")?;
        self.accounts
            .get(&from)
            .ok_or_else(|| LedgerError::account_not_found(from))?
            .require_funds(amount)?;

        self.accounts
            .get_mut(&from)
            .ok_or_else(|| LedgerError::account_not_found(from))?
            .transfer_out(amount, to)?;
        self.accounts
            .get_mut(&to)
            .ok_or_else(|| LedgerError::account_not_found(to))?
            .transfer_in(amount, from)?;

        info!("Transferred {} from {} to {}", amount, from, to);
        Ok(())
    }

    /// Encode the whole ledger as file text
    pub fn encode(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}{}\n", NEXT_ACCOUNT_PREFIX, self.next_account_number));
        out.push_str(&format!("{}{}\n", ACCOUNT_COUNT_PREFIX, self.accounts.len()));
        out.push_str(ACCOUNTS_SEPARATOR);
        out.push('\n');

        for account in self.accounts.values() {
            out.push_str(ACCOUNT_START);
            out.push('\n');
            out.push_str(&account.encode());
            out.push_str(ACCOUNT_END);
            out.push('\n');
        }

        out
    }

    /// Build a ledger from file text
    ///
    /// Never fails: a missing or malformed header falls back to defaults and
    /// each corrupt account block is logged and skipped.
    pub fn decode(text: &str) -> Self {
        let mut ledger = Self::new();
        ledger.restore(text);
        ledger
    }

    /// Write the ledger to `name` in `store`
    pub fn save(&self, store: &dyn FileStore, name: &str) -> LedgerResult<()> {
        store.ensure_directory().map_err(|e| {
            warn!("Cannot prepare data directory: {}", e);
            e
        })?;
        store.write(name, &self.encode()).map_err(|e| {
            warn!("Failed to save ledger to {}: {}", name, e);
            e
        })?;

        info!("Saved {} account(s) to {}", self.accounts.len(), name);
        Ok(())
    }

    /// Read a ledger from `name` in `store`
    ///
    /// A missing file is a first run and yields an empty ledger.
    pub fn load(store: &dyn FileStore, name: &str) -> LedgerResult<Self> {
        let mut ledger = Self::new();
        ledger.load_from(store, name)?;
        Ok(ledger)
    }

    /// Replace this ledger's contents with `name` from `store`
    ///
    /// The password hasher is kept. On a read error the current contents are
    /// left untouched.
    pub fn load_from(&mut self, store: &dyn FileStore, name: &str) -> LedgerResult<()> {
        if !store.exists(name) {
            info!("No data file {} found, starting fresh", name);
            self.restore("");
            return Ok(());
        }

        let text = store.read(name)?;
        if text.trim().is_empty() {
            warn!("Data file {} is empty, starting fresh", name);
        }
        self.restore(&text);

        info!("Loaded {} account(s) from {}", self.accounts.len(), name);
        if self.skipped_on_load > 0 {
            warn!(
                "Skipped {} corrupt account block(s) in {}",
                self.skipped_on_load, name
            );
        }
        Ok(())
    }

    fn restore(&mut self, text: &str) {
        let mut accounts = BTreeMap::new();
        let mut next_account_number = None;
        let mut declared_count = None;
        let mut skipped = 0;
        let mut block: Option<String> = None;

        for (index, line) in text.lines().enumerate() {
            if let Some(buffer) = block.as_mut() {
                if line == ACCOUNT_END {
                    let body = std::mem::take(buffer);
                    block = None;
                    match Account::decode(&body) {
                        Ok(account) => {
                            if accounts.contains_key(&account.number()) {
                                warn!(
                                    "Duplicate account {} before line {}, keeping the later one",
                                    account.number(),
                                    index + 1
                                );
                            }
                            accounts.insert(account.number(), account);
                        }
                        Err(e) => {
                            warn!("Error loading account block ending at line {}: {}", index + 1, e);
                            skipped += 1;
                        }
                    }
                } else {
                    buffer.push_str(line);
                    buffer.push('\n');
                }
                continue;
            }

            if line == ACCOUNT_START {
                block = Some(String::new());
            } else if let Some(value) = line.strip_prefix(NEXT_ACCOUNT_PREFIX) {
                match value.trim().parse::<AccountNumber>() {
                    Ok(number) => next_account_number = Some(number),
                    Err(_) => warn!("Ignoring malformed header line {}: '{}'", index + 1, line),
                }
            } else if let Some(value) = line.strip_prefix(ACCOUNT_COUNT_PREFIX) {
                declared_count = value.trim().parse::<usize>().ok();
            } else if !line.trim().is_empty() && line != ACCOUNTS_SEPARATOR {
                debug!("Ignoring stray line {}: '{}'", index + 1, line);
            }
        }

        if block.is_some() {
            warn!("Account block without {} at end of file", ACCOUNT_END);
            skipped += 1;
        }

        let after_last = accounts
            .keys()
            .next_back()
            .and_then(AccountNumber::next)
            .unwrap_or(AccountNumber::FIRST);
        let next = match next_account_number {
            Some(number) if number >= after_last => number,
            Some(number) => {
                warn!(
                    "{}{} is not above existing accounts, using {}",
                    NEXT_ACCOUNT_PREFIX, number, after_last
                );
                after_last
            }
            None => {
                if !text.trim().is_empty() {
                    warn!("Missing {} header, using {}", NEXT_ACCOUNT_PREFIX, after_last);
                }
                after_last
            }
        };

        if let Some(count) = declared_count {
            if count != accounts.len() + skipped {
                debug!(
                    "{}{} but found {} block(s)",
                    ACCOUNT_COUNT_PREFIX,
                    count,
                    accounts.len() + skipped
                );
            }
        }

        self.accounts = accounts;
        self.next_account_number = next;
        self.skipped_on_load = skipped;
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("accounts", &self.accounts.len())
            .field("next_account_number", &self.next_account_number)
            .field("skipped_on_load", &self.skipped_on_load)
            .finish()
    }
}

fn log_failed_login(number: AccountNumber, known: bool) {
    if known {
        debug!("Login for account {} failed: wrong password", number);
    } else {
        debug!("Login for account {} failed: no such account", number);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use crate::storage::store::{DiskStore, MemoryStore};
    use tempfile::TempDir;

    const DATA_FILE: &str = "accounts.dat";

    #[test]
    fn test_create_account() {
        let mut ledger = Ledger::new();
        let number = ledger
            .create_account("Alice", "password", Money::from_units(1000))
            .unwrap();

        assert_eq!(number, AccountNumber::FIRST);
        assert!(ledger.exists(number));
        assert_eq!(ledger.lookup(number).unwrap().holder_name(), "Alice");
        assert_eq!(ledger.next_account_number(), AccountNumber::new(1002));
    }

    #[test]
    fn test_sequential_account_numbers() {
        let mut ledger = Ledger::new();
        let numbers: Vec<u32> = (0..3)
            .map(|_| {
                ledger
                    .create_account("Holder", "pass1234", Money::zero())
                    .unwrap()
                    .value()
            })
            .collect();
        assert_eq!(numbers, vec![1001, 1002, 1003]);
    }

    #[test]
    fn test_create_account_validation() {
        let mut ledger = Ledger::new();
        let cases = [
            ("", "password", 1000),
            ("   ", "password", 1000),
            ("Bob", "123", 1000),
            ("Charlie", "password", -100),
            ("Dana|Eve", "password", 0),
            ("Line\nBreak", "password", 0),
        ];
        for (name, password, balance) in cases {
            let err = ledger
                .create_account(name, password, Money::from_units(balance))
                .unwrap_err();
            assert!(err.is_validation(), "{:?} should be rejected", name);
        }

        assert!(ledger.is_empty());
        assert_eq!(ledger.next_account_number(), AccountNumber::FIRST);
    }

    #[test]
    fn test_password_length_counts_characters() {
        let mut ledger = Ledger::new();
        assert!(ledger.create_account("Asha", "पासव", Money::zero()).is_ok());
    }

    #[test]
    fn test_login() {
        let mut ledger = Ledger::new();
        let number = ledger
            .create_account("Dave", "password123", Money::from_units(1500))
            .unwrap();

        let account = ledger.login(number, "password123").unwrap();
        assert_eq!(account.number(), number);
    }

    #[test]
    fn test_login_failures_are_uniform() {
        let mut ledger = Ledger::new();
        let number = ledger
            .create_account("Eve", "password123", Money::from_units(1500))
            .unwrap();

        let wrong_password = ledger.login(number, "wrongpassword").unwrap_err();
        let unknown = ledger.login(AccountNumber::new(9999), "password123").unwrap_err();

        assert!(matches!(wrong_password, LedgerError::InvalidCredentials));
        assert!(matches!(unknown, LedgerError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown.to_string());
    }

    #[test]
    fn test_login_mut_allows_operations() {
        let mut ledger = Ledger::new();
        let number = ledger
            .create_account("Frank", "password", Money::from_units(100))
            .unwrap();

        ledger
            .login_mut(number, "password")
            .unwrap()
            .deposit(Money::from_units(50))
            .unwrap();
        assert_eq!(ledger.lookup(number).unwrap().balance(), Money::from_units(150));
        assert!(ledger.login_mut(number, "nope").is_err());
    }

    #[test]
    fn test_transfer() {
        let mut ledger = Ledger::new();
        let a = ledger.create_account("A", "pass1234", Money::from_units(1000)).unwrap();
        let b = ledger.create_account("B", "pass1234", Money::from_units(200)).unwrap();

        ledger.transfer(a, b, Money::from_units(300)).unwrap();

        let source = ledger.lookup(a).unwrap();
        let target = ledger.lookup(b).unwrap();
        assert_eq!(source.balance(), Money::from_units(700));
        assert_eq!(target.balance(), Money::from_units(500));

        let out = source.transactions().last().unwrap();
        assert_eq!(out.kind(), TransactionKind::Transfer);
        assert_eq!(out.description(), "Transfer to 1002");
        let incoming = target.transactions().last().unwrap();
        assert_eq!(incoming.description(), "Transfer from 1001");
        assert_eq!(incoming.balance_after(), Money::from_units(500));
    }

    #[test]
    fn test_transfer_failures_change_nothing() {
        let mut ledger = Ledger::new();
        let a = ledger.create_account("A", "pass1234", Money::from_units(100)).unwrap();
        let b = ledger.create_account("B", "pass1234", Money::zero()).unwrap();

        assert!(matches!(
            ledger.transfer(a, b, Money::from_units(500)),
            Err(LedgerError::InsufficientFunds { .. })
        ));
        assert!(ledger.transfer(a, a, Money::from_units(10)).is_err());
        assert!(ledger.transfer(a, b, Money::zero()).is_err());
        assert!(ledger
            .transfer(a, AccountNumber::new(4242), Money::from_units(10))
            .unwrap_err()
            .is_not_found());

        assert_eq!(ledger.lookup(a).unwrap().balance(), Money::from_units(100));
        assert_eq!(ledger.lookup(a).unwrap().transactions().len(), 1);
        assert!(ledger.lookup(b).unwrap().balance().is_zero());
    }

    #[test]
    fn test_transfer_overflow_changes_nothing() {
        let mut ledger = Ledger::new();
        let a = ledger.create_account("A", "pass1234", Money::from_units(10)).unwrap();
        let b = ledger
            .create_account("B", "pass1234", Money::new(rust_decimal::Decimal::MAX))
            .unwrap();

        assert!(ledger
            .transfer(a, b, Money::from_units(5))
            .unwrap_err()
            .is_validation());
        assert_eq!(ledger.lookup(a).unwrap().balance(), Money::from_units(10));
        assert_eq!(ledger.lookup(a).unwrap().transactions().len(), 1);
        assert_eq!(ledger.lookup(b).unwrap().transactions().len(), 1);
    }

    #[test]
    fn test_decode_skips_last_possible_number() {
        let text = "NEXT_ACCOUNT:1002\nACCOUNT_COUNT:2\n---ACCOUNTS---\n\
                    ACCOUNT_START\n4294967295|Mallory|hash|5\nTRANSACTIONS:0\nFDS:0\nACCOUNT_END\n\
                    ACCOUNT_START\n1001|Alice|hash|5\nTRANSACTIONS:0\nFDS:0\nACCOUNT_END\n";
        let ledger = Ledger::decode(text);

        assert_eq!(ledger.len(), 1);
        assert!(ledger.exists(AccountNumber::FIRST));
        assert_eq!(ledger.skipped_on_load(), 1);
        assert_eq!(ledger.next_account_number(), AccountNumber::new(1002));
    }

    #[test]
    fn test_create_account_when_numbers_exhausted() {
        let mut ledger = Ledger::decode("NEXT_ACCOUNT:4294967295\nACCOUNT_COUNT:0\n---ACCOUNTS---\n");
        assert_eq!(ledger.next_account_number(), AccountNumber::new(u32::MAX));

        let err = ledger
            .create_account("Alice", "password", Money::zero())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(ledger.is_empty());
        assert_eq!(ledger.next_account_number(), AccountNumber::new(u32::MAX));
    }

    #[test]
    fn test_encode_header() {
        let mut ledger = Ledger::new();
        ledger.create_account("Alice", "password", Money::from_units(10)).unwrap();

        let text = ledger.encode();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "NEXT_ACCOUNT:1002");
        assert_eq!(lines[1], "ACCOUNT_COUNT:1");
        assert_eq!(lines[2], "---ACCOUNTS---");
        assert_eq!(lines[3], "ACCOUNT_START");
        assert!(lines[4].starts_with("1001|Alice|"));
        assert_eq!(*lines.last().unwrap(), "ACCOUNT_END");
    }

    #[test]
    fn test_save_and_load() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::new();
        let a = ledger.create_account("Alice", "password", Money::from_units(5000)).unwrap();
        let b = ledger.create_account("Bob", "password", Money::zero()).unwrap();
        {
            let alice = ledger.lookup_mut(a).unwrap();
            alice.withdraw(Money::from_cents(1999)).unwrap();
            alice.open_fixed_deposit(Money::from_units(1000), 12).unwrap();
        }
        ledger.save(&store, DATA_FILE).unwrap();

        let loaded = Ledger::load(&store, DATA_FILE).unwrap();
        assert_eq!(loaded.next_account_number(), ledger.next_account_number());
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.skipped_on_load(), 0);

        for number in [a, b] {
            let before = ledger.lookup(number).unwrap();
            let after = loaded.lookup(number).unwrap();
            assert_eq!(after.balance(), before.balance());
            assert!(after.transactions().eq(before.transactions()));
            assert_eq!(after.fixed_deposits(), before.fixed_deposits());
        }
        assert!(loaded.login(a, "password").is_ok());
    }

    #[test]
    fn test_numbers_not_reused_after_reload() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::new();
        ledger.create_account("Alice", "password", Money::zero()).unwrap();
        ledger.create_account("Bob", "password", Money::zero()).unwrap();
        ledger.save(&store, DATA_FILE).unwrap();

        let mut loaded = Ledger::load(&store, DATA_FILE).unwrap();
        let number = loaded.create_account("Carol", "password", Money::zero()).unwrap();
        assert_eq!(number, AccountNumber::new(1003));
    }

    #[test]
    fn test_load_missing_file_is_fresh() {
        let store = MemoryStore::new();
        let ledger = Ledger::load(&store, DATA_FILE).unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.next_account_number(), AccountNumber::FIRST);
    }

    #[test]
    fn test_load_skips_corrupt_block() {
        let text = "NEXT_ACCOUNT:1003\n\
                    ACCOUNT_COUNT:2\n\
                    ---ACCOUNTS---\n\
                    ACCOUNT_START\n\
                    1001|Alice|hash\n\
                    TRANSACTIONS:0\n\
                    FDS:0\n\
                    ACCOUNT_END\n\
                    ACCOUNT_START\n\
                    1002|Bob|hash|250\n\
                    TRANSACTIONS:1\n\
                    0|250|250|1700000000|Initial deposit\n\
                    FDS:0\n\
                    ACCOUNT_END\n";
        let store = MemoryStore::new();
        store.write(DATA_FILE, text).unwrap();

        let ledger = Ledger::load(&store, DATA_FILE).unwrap();
        assert_eq!(ledger.len(), 1);
        assert!(!ledger.exists(AccountNumber::new(1001)));
        assert_eq!(
            ledger.lookup(AccountNumber::new(1002)).unwrap().balance(),
            Money::from_units(250)
        );
        assert_eq!(ledger.skipped_on_load(), 1);
        assert_eq!(ledger.next_account_number(), AccountNumber::new(1003));
    }

    #[test]
    fn test_decode_without_header_repairs_counter() {
        let text = "ACCOUNT_START\n1007|Zed|hash|1\nTRANSACTIONS:0\nFDS:0\nACCOUNT_END\n";
        let ledger = Ledger::decode(text);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.next_account_number(), AccountNumber::new(1008));
    }

    #[test]
    fn test_decode_raises_stale_counter() {
        let text = "NEXT_ACCOUNT:1001\nACCOUNT_COUNT:1\n---ACCOUNTS---\n\
                    ACCOUNT_START\n1005|Zed|hash|1\nTRANSACTIONS:0\nFDS:0\nACCOUNT_END\n";
        let ledger = Ledger::decode(text);
        assert_eq!(ledger.next_account_number(), AccountNumber::new(1006));
    }

    #[test]
    fn test_decode_unterminated_block() {
        let text = "NEXT_ACCOUNT:1002\nACCOUNT_COUNT:1\n---ACCOUNTS---\n\
                    ACCOUNT_START\n1001|Zed|hash|1\nTRANSACTIONS:0\nFDS:0\n";
        let ledger = Ledger::decode(text);
        assert!(ledger.is_empty());
        assert_eq!(ledger.skipped_on_load(), 1);
        assert_eq!(ledger.next_account_number(), AccountNumber::new(1002));
    }

    #[test]
    fn test_load_from_keeps_state_on_read_error() {
        struct BrokenStore;
        impl FileStore for BrokenStore {
            fn ensure_directory(&self) -> LedgerResult<()> {
                Err(LedgerError::Storage("read-only".into()))
            }
            fn write(&self, _: &str, _: &str) -> LedgerResult<()> {
                Err(LedgerError::Storage("read-only".into()))
            }
            fn read(&self, _: &str) -> LedgerResult<String> {
                Err(LedgerError::Storage("unreadable".into()))
            }
            fn exists(&self, _: &str) -> bool {
                true
            }
            fn delete(&self, _: &str) -> LedgerResult<bool> {
                Ok(false)
            }
        }

        let mut ledger = Ledger::new();
        ledger.create_account("Alice", "password", Money::from_units(1)).unwrap();

        assert!(ledger.load_from(&BrokenStore, DATA_FILE).is_err());
        assert!(matches!(
            ledger.save(&BrokenStore, DATA_FILE),
            Err(LedgerError::Storage(_))
        ));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_save_to_disk() {
        let temp_dir = TempDir::new().unwrap();
        let store = DiskStore::new(temp_dir.path().join("data"));

        let mut ledger = Ledger::new();
        ledger.create_account("Alice", "password", Money::from_units(75)).unwrap();
        ledger.save(&store, DATA_FILE).unwrap();

        assert!(store.file_path(DATA_FILE).exists());
        let loaded = Ledger::load(&store, DATA_FILE).unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_custom_hasher() {
        struct Reverse;
        impl PasswordHasher for Reverse {
            fn hash(&self, password: &str) -> String {
                password.chars().rev().collect()
            }
        }

        let mut ledger = Ledger::with_hasher(Box::new(Reverse));
        let number = ledger.create_account("Alice", "abcd", Money::zero()).unwrap();
        assert_eq!(ledger.lookup(number).unwrap().password_hash(), "dcba");
        assert!(ledger.login(number, "abcd").is_ok());
    }
}
