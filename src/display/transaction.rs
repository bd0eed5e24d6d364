//! Transaction display formatting
//!
//! Renders the short transaction history as a register, oldest first.

use std::fmt::Write;

use chrono::{DateTime, Local, Utc};

use crate::config::Settings;
use crate::models::Transaction;

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut row = format!(
        "{:<19}  {:<11}  {:>12}  {:>12}",
        format_timestamp(txn.timestamp(), &settings.timestamp_format),
        txn.kind().label(),
        txn.amount().format_with_symbol(symbol),
        txn.balance_after().format_with_symbol(symbol),
    );
    if !txn.description().is_empty() {
        row.push_str("  ");
        row.push_str(txn.description());
    }
    row
}

/// Format a list of transactions as a register
pub fn format_transaction_history<'a, I>(transactions: I, settings: &Settings) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut rows = transactions.into_iter().peekable();
    if rows.peek().is_none() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<19}  {:<11}  {:>12}  {:>12}  {}\n",
        "#", "Date", "Type", "Amount", "Balance", "Description"
    ));
    output.push_str(&"-".repeat(77));
    output.push('\n');

    for (index, txn) in rows.enumerate() {
        output.push_str(&format!("{:>3}  ", index + 1));
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output
}

/// Local-time rendering; an invalid format string falls back to RFC 3339
pub(crate) fn format_timestamp(timestamp: DateTime<Utc>, format: &str) -> String {
    let local = timestamp.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(format)).is_err() {
        return local.to_rfc3339();
    }
    out
}
