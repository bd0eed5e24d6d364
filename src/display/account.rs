//! Account display formatting

use crate::config::Settings;
use crate::services::AccountSummary;

/// One-line balance
pub fn format_balance(summary: &AccountSummary, settings: &Settings) -> String {
    format!(
        "Current Balance: {}",
        summary.balance.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format a single account's details
pub fn format_account_details(summary: &AccountSummary, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str("===== ACCOUNT DETAILS =====\n");
    output.push_str(&format!("Account Number: {}\n", summary.number));
    output.push_str(&format!("Account Holder: {}\n", summary.holder_name));
    output.push_str(&format!(
        "Balance:        {}\n",
        summary.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Transactions:   {}\n", summary.transaction_count));
    output.push_str(&format!("Fixed Deposits: {}\n", summary.fixed_deposit_count));
    if summary.fixed_deposit_count > 0 {
        output.push_str(&format!(
            "Total in FDs:   {}\n",
            summary.fixed_deposit_principal.format_with_symbol(symbol)
        ));
    }

    output
}
