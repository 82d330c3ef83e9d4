//! Shared helpers for month bucketing and numeric normalization.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

/// Formats a date as a `YYYY-MM` month key.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Returns the trailing `count` month keys ending at the month of `now`,
/// oldest first.
pub fn trailing_month_keys(now: DateTime<Utc>, count: usize) -> Vec<String> {
    let mut keys = Vec::with_capacity(count);
    let (mut year, mut month) = (now.year(), now.month() as i32);
    for _ in 0..count {
        keys.push(format!("{:04}-{:02}", year, month));
        month -= 1;
        if month == 0 {
            month = 12;
            year -= 1;
        }
    }
    keys.reverse();
    keys
}

/// Returns the last instant of the month identified by a `YYYY-MM` key,
/// or `None` if the key is malformed.
pub fn end_of_month(key: &str) -> Option<DateTime<Utc>> {
    let (year_str, month_str) = key.split_once('-')?;
    let year: i32 = year_str.parse().ok()?;
    let month: u32 = month_str.parse().ok()?;
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last_day = first_of_next.pred_opt()?;
    Some(Utc.from_utc_datetime(&last_day.and_hms_opt(23, 59, 59)?))
}

/// Checks that a month key has the `YYYY-MM` shape with a valid month.
pub fn is_valid_month_key(key: &str) -> bool {
    end_of_month(key).is_some()
}

/// Normalizes a percentage-like rate into a 0-1 fraction.
///
/// Input may arrive in percentage form (e.g. "8.9" meaning 8.9%); any
/// value with magnitude above 1 is divided by 100.
pub fn normalize_fraction(rate: Decimal) -> Decimal {
    if rate.abs() > Decimal::ONE {
        rate / dec!(100)
    } else {
        rate
    }
}

/// Parses a decimal accepting comma as the decimal separator.
///
/// Returns `None` for empty or unparseable input rather than erroring;
/// import rows degrade to missing values instead of aborting.
pub fn parse_decimal_lenient(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(&trimmed.replace(',', ".")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_month_keys_cross_year_boundary() {
        let now = Utc.with_ymd_and_hms(2026, 2, 15, 12, 0, 0).unwrap();
        let keys = trailing_month_keys(now, 4);
        assert_eq!(keys, vec!["2025-11", "2025-12", "2026-01", "2026-02"]);
    }

    #[test]
    fn end_of_month_handles_december() {
        let end = end_of_month("2025-12").unwrap();
        assert_eq!(end.date_naive(), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn end_of_month_rejects_garbage() {
        assert!(end_of_month("2025-13").is_none());
        assert!(end_of_month("not-a-month").is_none());
        assert!(!is_valid_month_key("2025"));
    }

    #[test]
    fn normalize_fraction_divides_percentages() {
        assert_eq!(normalize_fraction(dec!(8.9)), dec!(0.089));
        assert_eq!(normalize_fraction(dec!(0.089)), dec!(0.089));
        assert_eq!(normalize_fraction(dec!(-12)), dec!(-0.12));
    }

    #[test]
    fn parse_decimal_lenient_accepts_comma() {
        assert_eq!(parse_decimal_lenient("1234,56"), Some(dec!(1234.56)));
        assert_eq!(parse_decimal_lenient(" 42 "), Some(dec!(42)));
        assert_eq!(parse_decimal_lenient(""), None);
        assert_eq!(parse_decimal_lenient("abc"), None);
    }
}
