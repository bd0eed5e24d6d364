//! Fixed deposit model
//!
//! A term deposit with a principal locked for 12 or 24 months at a rate fixed
//! when it is opened. Interest is simple, paid at maturity.

use chrono::{DateTime, Local, Months, NaiveDate, SubsecRound, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};
use crate::storage::format::{parse_money, parse_number, parse_timestamp, split_fields};

/// Tenures a fixed deposit may be opened for, in months
pub const SUPPORTED_TENURES: [u32; 2] = [12, 24];

/// Supported tenures as text, e.g. "12 or 24"
pub fn describe_tenures() -> String {
    SUPPORTED_TENURES
        .iter()
        .map(|months| months.to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Annual interest rate (percent) offered for a tenure
pub fn rate_for_tenure(tenure_months: u32) -> Option<Decimal> {
    match tenure_months {
        12 => Some(Decimal::new(65, 1)),
        24 => Some(Decimal::new(75, 1)),
        _ => None,
    }
}

/// A fixed-term, fixed-rate deposit held by an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedDeposit {
    principal: Money,
    tenure_months: u32,
    /// Annual rate in percent
    interest_rate: Decimal,
    opened_at: DateTime<Utc>,
}

impl FixedDeposit {
    /// Open a deposit today at the rate for `tenure_months`
    ///
    /// Fails when the maturity amount would not be representable.
    pub fn open(principal: Money, tenure_months: u32) -> LedgerResult<Self> {
        if !principal.is_positive() {
            return Err(LedgerError::Validation(
                "FD amount must be positive".into(),
            ));
        }

        let interest_rate = rate_for_tenure(tenure_months).ok_or_else(|| {
            LedgerError::Validation(format!(
                "FD tenure must be {} months, got {}",
                describe_tenures(),
                tenure_months
            ))
        })?;

        let deposit = Self {
            principal,
            tenure_months,
            interest_rate,
            opened_at: Utc::now().trunc_subsecs(0),
        };
        deposit.maturity_amount()?;
        Ok(deposit)
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn tenure_months(&self) -> u32 {
        self.tenure_months
    }

    /// Annual interest rate in percent
    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Principal plus simple interest over the tenure
    ///
    /// `principal * (1 + rate/100 * tenure/12)`, not rounded.
    pub fn maturity_amount(&self) -> LedgerResult<Money> {
        let growth = Decimal::from(self.tenure_months)
            .checked_div(Decimal::from(12))
            .and_then(|years| self.interest_rate.checked_div(Decimal::ONE_HUNDRED)?.checked_mul(years))
            .and_then(|rate| Decimal::ONE.checked_add(rate));

        growth
            .and_then(|growth| self.principal.amount().checked_mul(growth))
            .map(Money::new)
            .ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Maturity amount of a {} deposit is too large",
                    self.principal
                ))
            })
    }

    /// Interest earned by maturity
    pub fn interest(&self) -> LedgerResult<Money> {
        self.maturity_amount()?
            .checked_sub(self.principal)
            .ok_or_else(|| LedgerError::Validation("Interest is out of range".into()))
    }

    /// Calendar date the deposit matures on, in local time
    pub fn maturity_date(&self) -> NaiveDate {
        self.maturity_date_in(&Local)
    }

    /// Calendar date the deposit matures on, in `tz`
    ///
    /// Months are added to the opening date in `tz`; a day missing from the
    /// target month clamps to its last day.
    pub fn maturity_date_in<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        // Saturates at chrono's last representable date
        self.opened_at
            .with_timezone(tz)
            .date_naive()
            .checked_add_months(Months::new(self.tenure_months))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Encode as one `principal|tenure|rate|unix_ts` line
    pub fn encode(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.principal.encode(),
            self.tenure_months,
            self.interest_rate.normalize(),
            self.opened_at.timestamp()
        )
    }

    /// Decode a line produced by [`encode`](Self::encode)
    ///
    /// Principal and tenure are validated as on [`open`](Self::open); the
    /// persisted rate and open date replace the derived ones, so a revised
    /// rate table never changes existing deposits.
    pub fn decode(line: &str) -> LedgerResult<Self> {
        // Fields past the fourth are ignored
        let fields = split_fields(line, "Fixed deposit", 4, 5)?;

        let principal = parse_money(fields[0], "FD principal")?;
        let tenure_months: u32 = parse_number(fields[1], "FD tenure")?;
        let interest_rate: Decimal = parse_number(fields[2], "FD interest rate")?;
        let opened_at = parse_timestamp(fields[3], "FD open timestamp")?;

        let mut deposit = Self::open(principal, tenure_months)
            .map_err(|e| LedgerError::format(format!("invalid fixed deposit '{}': {}", line, e)))?;
        deposit.interest_rate = interest_rate;
        deposit.opened_at = opened_at;
        deposit
            .maturity_amount()
            .map_err(|e| LedgerError::format(format!("invalid fixed deposit '{}': {}", line, e)))?;
        Ok(deposit)
    }
}
