//! Display formatting for terminal output
//!
//! Each function renders one kind of record as plain text. Amounts use the
//! currency symbol from [`Settings`](crate::config::Settings).

pub mod account;
pub mod fixed_deposit;
pub mod transaction;

pub use account::{format_account_details, format_balance};
pub use fixed_deposit::{format_fixed_deposit_list, format_fixed_deposit_opened};
pub use transaction::{format_transaction_history, format_transaction_row};
