//! Helpers for mapping between SQLite text columns and domain types.
//!
//! Money columns are stored as decimal strings and timestamps as RFC3339
//! strings. Reads are tolerant: a value that fails to parse logs and
//! falls back to a zero/now default instead of failing the whole row.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn parse_decimal(value: &str, field: &str) -> Decimal {
    match Decimal::from_str(value) {
        Ok(d) => d,
        Err(e) => {
            log::error!("Failed to parse {} '{}': {}. Falling back to zero.", field, value, e);
            Decimal::ZERO
        }
    }
}

pub fn parse_decimal_opt(value: Option<&str>, field: &str) -> Option<Decimal> {
    value.map(|v| parse_decimal(v, field))
}

pub fn parse_datetime(value: &str, field: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(e) => {
            log::error!("Failed to parse {} '{}': {}. Falling back to now.", field, value, e);
            Utc::now()
        }
    }
}

pub fn parse_datetime_opt(value: Option<&str>, field: &str) -> Option<DateTime<Utc>> {
    value.map(|v| parse_datetime(v, field))
}

pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.to_rfc3339()
}

pub fn format_datetime_opt(value: Option<DateTime<Utc>>) -> Option<String> {
    value.map(format_datetime)
}

pub fn format_decimal_opt(value: Option<Decimal>) -> Option<String> {
    value.map(|v| v.to_string())
}
