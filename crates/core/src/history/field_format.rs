//! Field value formatting for audit changesets.
//!
//! Formatting never fails: absent values render as the "not defined"
//! placeholder instead of surfacing an error.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::constants::NOT_DEFINED_PLACEHOLDER;
use crate::entries::EntryKind;
use crate::fx::format_amount;

pub(super) fn amount(value: Decimal, currency_code: &str) -> String {
    format_amount(value, currency_code)
}

/// Long-form date, e.g. "January 31, 2024".
pub(super) fn long_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%B %-d, %Y").to_string(),
        None => NOT_DEFINED_PLACEHOLDER.to_string(),
    }
}

/// Kind-aware completion wording, e.g. "paid"/"unpaid".
pub(super) fn completion(kind: EntryKind, completed: bool) -> String {
    let (done, not_done) = kind.completion_words();
    if completed { done } else { not_done }.to_string()
}

/// Recurrence repetition count; 0 renders as unbounded.
pub(super) fn repetitions(count: Option<u32>) -> String {
    match count {
        Some(0) => "indefinite".to_string(),
        Some(n) => n.to_string(),
        None => NOT_DEFINED_PLACEHOLDER.to_string(),
    }
}

pub(super) fn text(value: &str) -> String {
    if value.is_empty() {
        NOT_DEFINED_PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31);
        assert_eq!(long_date(date), "January 31, 2024");
        assert_eq!(long_date(None), NOT_DEFINED_PLACEHOLDER);
    }

    #[test]
    fn test_completion_wording() {
        assert_eq!(completion(EntryKind::Expense, true), "paid");
        assert_eq!(completion(EntryKind::Expense, false), "unpaid");
        assert_eq!(completion(EntryKind::Income, true), "received");
        assert_eq!(completion(EntryKind::Income, false), "pending");
    }

    #[test]
    fn test_repetitions() {
        assert_eq!(repetitions(Some(0)), "indefinite");
        assert_eq!(repetitions(Some(12)), "12");
        assert_eq!(repetitions(None), NOT_DEFINED_PLACEHOLDER);
    }

    #[test]
    fn test_amount_uses_currency_precision() {
        assert_eq!(amount(dec!(10), "USD"), "10.00 USD");
    }
}
