//! Line and field helpers for the flat-file ledger format
//!
//! Every record is one line with `|`-separated fields. Section headers are
//! `NAME:<value>` lines. These helpers turn malformed input into
//! `LedgerError::Format` so decoders can use `?` throughout.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

/// Separator between fields on one line
pub const FIELD_SEPARATOR: char = '|';

/// Split a record line into at least `min` and at most `max` fields
///
/// The last field absorbs any further separators, so free text placed last
/// survives a round trip even when it contains `|`.
pub fn split_fields<'a>(
    line: &'a str,
    record: &str,
    min: usize,
    max: usize,
) -> LedgerResult<Vec<&'a str>> {
    let fields: Vec<&str> = line.splitn(max, FIELD_SEPARATOR).collect();
    if fields.len() < min {
        return Err(LedgerError::format(format!(
            "{} record has {} field(s), expected at least {}: '{}'",
            record,
            fields.len(),
            min,
            line
        )));
    }
    Ok(fields)
}

/// Parse a numeric field
pub fn parse_number<T: FromStr>(field: &str, what: &str) -> LedgerResult<T> {
    field
        .trim()
        .parse()
        .map_err(|_| LedgerError::format(format!("invalid {}: '{}'", what, field)))
}

/// Parse a decimal amount field
pub fn parse_money(field: &str, what: &str) -> LedgerResult<Money> {
    Money::parse(field).map_err(|_| LedgerError::format(format!("invalid {}: '{}'", what, field)))
}

/// Parse a unix timestamp (seconds) field
pub fn parse_timestamp(field: &str, what: &str) -> LedgerResult<DateTime<Utc>> {
    let seconds: i64 = parse_number(field, what)?;
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| LedgerError::format(format!("{} out of range: {}", what, seconds)))
}

/// Parse a `PREFIX<count>` section header, e.g. `TRANSACTIONS:3`
pub fn parse_count(line: Option<&str>, prefix: &str) -> LedgerResult<usize> {
    let line = line.ok_or_else(|| LedgerError::format(format!("missing {} line", prefix)))?;
    let value = line
        .strip_prefix(prefix)
        .ok_or_else(|| LedgerError::format(format!("expected {} line, found '{}'", prefix, line)))?;
    parse_number(value, prefix)
}
