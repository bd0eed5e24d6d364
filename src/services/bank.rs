//! Bank service
//!
//! Every account operation a customer can perform, each one checking the
//! account number and password first, plus saving and loading the ledger.

use log::info;

use crate::error::LedgerResult;
use crate::models::{Account, AccountNumber, FixedDeposit, Money, Transaction};
use crate::storage::{FileStore, Ledger};

/// Service for customer-facing account operations
pub struct BankService<'a> {
    ledger: &'a mut Ledger,
    store: &'a dyn FileStore,
    data_file: &'a str,
}

/// Snapshot of an account for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub number: AccountNumber,
    pub holder_name: String,
    pub balance: Money,
    pub transaction_count: usize,
    pub fixed_deposit_count: usize,
    /// Sum of the principals locked in fixed deposits
    pub fixed_deposit_principal: Money,
}

impl AccountSummary {
    fn of(account: &Account) -> Self {
        Self {
            number: account.number(),
            holder_name: account.holder_name().to_string(),
            balance: account.balance(),
            transaction_count: account.transactions().len(),
            fixed_deposit_count: account.fixed_deposits().len(),
            fixed_deposit_principal: account.total_fixed_deposit_principal(),
        }
    }
}

impl<'a> BankService<'a> {
    /// Create a service that persists `ledger` as `data_file` in `store`
    pub fn new(ledger: &'a mut Ledger, store: &'a dyn FileStore, data_file: &'a str) -> Self {
        Self {
            ledger,
            store,
            data_file,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &*self.ledger
    }

    /// Open a new account
    pub fn create_account(
        &mut self,
        name: &str,
        password: &str,
        initial_balance: Money,
    ) -> LedgerResult<AccountNumber> {
        self.ledger.create_account(name, password, initial_balance)
    }

    /// Check credentials and return the account's summary
    pub fn login(&self, number: AccountNumber, password: &str) -> LedgerResult<AccountSummary> {
        let account = self.ledger.login(number, password)?;
        info!("Account {} logged in", number);
        Ok(AccountSummary::of(account))
    }

    /// Deposit cash; returns the new balance
    pub fn deposit(
        &mut self,
        number: AccountNumber,
        password: &str,
        amount: Money,
    ) -> LedgerResult<Money> {
        let account = self.ledger.login_mut(number, password)?;
        account.deposit(amount)?;
        info!("Deposited {} into {}", amount, number);
        Ok(account.balance())
    }

    /// Withdraw cash; returns the new balance
    pub fn withdraw(
        &mut self,
        number: AccountNumber,
        password: &str,
        amount: Money,
    ) -> LedgerResult<Money> {
        let account = self.ledger.login_mut(number, password)?;
        account.withdraw(amount)?;
        info!("Withdrew {} from {}", amount, number);
        Ok(account.balance())
    }

    /// Transfer from the authenticated account to another; returns the
    /// sender's new balance
    pub fn transfer(
        &mut self,
        from: AccountNumber,
        password: &str,
        to: AccountNumber,
        amount: Money,
    ) -> LedgerResult<Money> {
        self.ledger.login(from, password)?;
        self.ledger.transfer(from, to, amount)?;
        self.balance_of(from, password)
    }

    pub fn balance_of(&self, number: AccountNumber, password: &str) -> LedgerResult<Money> {
        Ok(self.ledger.login(number, password)?.balance())
    }

    pub fn account_details_of(
        &self,
        number: AccountNumber,
        password: &str,
    ) -> LedgerResult<AccountSummary> {
        Ok(AccountSummary::of(self.ledger.login(number, password)?))
    }

    /// Recent transactions, oldest first
    pub fn transaction_history_of(
        &self,
        number: AccountNumber,
        password: &str,
    ) -> LedgerResult<Vec<Transaction>> {
        let account = self.ledger.login(number, password)?;
        Ok(account.transactions().cloned().collect())
    }

    /// Lock part of the balance in a fixed deposit
    pub fn open_fixed_deposit(
        &mut self,
        number: AccountNumber,
        password: &str,
        amount: Money,
        tenure_months: u32,
    ) -> LedgerResult<FixedDeposit> {
        let account = self.ledger.login_mut(number, password)?;
        let deposit = account.open_fixed_deposit(amount, tenure_months)?.clone();
        info!(
            "Opened {} month FD of {} for {}",
            tenure_months, amount, number
        );
        Ok(deposit)
    }

    pub fn fixed_deposits_of(
        &self,
        number: AccountNumber,
        password: &str,
    ) -> LedgerResult<Vec<FixedDeposit>> {
        Ok(self.ledger.login(number, password)?.fixed_deposits().to_vec())
    }

    /// Persist the whole ledger
    pub fn save(&self) -> LedgerResult<()> {
        self.ledger.save(self.store, self.data_file)
    }

    /// Replace the in-memory ledger with the persisted one
    pub fn load(&mut self) -> LedgerResult<()> {
        self.ledger.load_from(self.store, self.data_file)
    }
}
