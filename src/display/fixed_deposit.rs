//! Fixed deposit display formatting

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::models::{FixedDeposit, Money};

use super::transaction::format_timestamp;

/// Confirmation shown after opening a deposit
pub fn format_fixed_deposit_opened(
    deposit: &FixedDeposit,
    remaining_balance: Money,
    settings: &Settings,
) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str("Fixed Deposit created successfully!\n");
    output.push_str(&format!(
        "Principal:       {}\n",
        deposit.principal().format_with_symbol(symbol)
    ));
    output.push_str(&format!("Tenure:          {} months\n", deposit.tenure_months()));
    output.push_str(&format!("Interest Rate:   {}%\n", deposit.interest_rate()));
    output.push_str(&format!(
        "Interest:        {}\n",
        format_amount(deposit.interest(), symbol)
    ));
    output.push_str(&format!(
        "Maturity Amount: {}\n",
        format_amount(deposit.maturity_amount(), symbol)
    ));
    output.push_str(&format!("Maturity Date:   {}\n", deposit.maturity_date()));
    output.push_str(&format!(
        "Remaining Balance: {}\n",
        remaining_balance.format_with_symbol(symbol)
    ));

    output
}

/// Format every deposit on an account, numbered from 1
pub fn format_fixed_deposit_list(deposits: &[FixedDeposit], settings: &Settings) -> String {
    if deposits.is_empty() {
        return "No fixed deposits found.\n".to_string();
    }

    let symbol = &settings.currency_symbol;
    let mut output = String::new();
    for (index, deposit) in deposits.iter().enumerate() {
        output.push_str(&format!("FD #{}\n", index + 1));
        output.push_str(&format!(
            "  Principal:       {}\n",
            deposit.principal().format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "  Tenure:          {} months @ {}%\n",
            deposit.tenure_months(),
            deposit.interest_rate()
        ));
        output.push_str(&format!(
            "  Opened:          {}\n",
            format_timestamp(deposit.opened_at(), &settings.timestamp_format)
        ));
        output.push_str(&format!("  Matures On:      {}\n", deposit.maturity_date()));
        output.push_str(&format!(
            "  Interest:        {}\n",
            format_amount(deposit.interest(), symbol)
        ));
        output.push_str(&format!(
            "  Maturity Amount: {}\n",
            format_amount(deposit.maturity_amount(), symbol)
        ));
    }

    let total: Money = deposits.iter().map(FixedDeposit::principal).sum();
    output.push_str(&format!(
        "Total principal: {}\n",
        total.format_with_symbol(symbol)
    ));

    output
}

fn format_amount(amount: LedgerResult<Money>, symbol: &str) -> String {
    match amount {
        Ok(amount) => amount.format_with_symbol(symbol),
        Err(_) => "out of range".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_opened() {
        let fd = FixedDeposit::open(Money::from_units(10000), 12).unwrap();
        let output = format_fixed_deposit_opened(&fd, Money::from_units(5000), &Settings::default());

        assert!(output.contains("Principal:       ₹10000.00"));
        assert!(output.contains("Interest Rate:   6.5%"));
        assert!(output.contains("Interest:        ₹650.00"));
        assert!(output.contains("Maturity Amount: ₹10650.00"));
        assert!(output.contains("Remaining Balance: ₹5000.00"));
    }

    #[test]
    fn test_format_list() {
        let settings = Settings::default();
        assert_eq!(
            format_fixed_deposit_list(&[], &settings),
            "No fixed deposits found.\n"
        );

        let deposits = vec![
            FixedDeposit::open(Money::from_units(1000), 12).unwrap(),
            FixedDeposit::open(Money::from_units(2000), 24).unwrap(),
        ];
        let output = format_fixed_deposit_list(&deposits, &settings);
        assert!(output.contains("FD #1"));
        assert!(output.contains("FD #2"));
        assert!(output.contains("24 months @ 7.5%"));
        assert!(output.contains("Interest:        ₹300.00"));
        assert!(output.contains("Total principal: ₹3000.00"));
    }
}
