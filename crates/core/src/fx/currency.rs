//! Currency display rules and rate-day bucketing.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rust_decimal::Decimal;

use centavo_rates::{currency_kind, CurrencyKind};

use crate::constants::FIAT_DECIMAL_PRECISION;

/// Rolls a calendar day back to the most recent business day.
///
/// Daily rate cache entries are keyed by this day, so weekend requests
/// share Friday's bucket.
pub fn reference_business_day(day: NaiveDate) -> NaiveDate {
    match day.weekday() {
        Weekday::Sat => day - Duration::days(1),
        Weekday::Sun => day - Duration::days(2),
        _ => day,
    }
}

/// Display precision for an amount in a given currency.
///
/// Fiat renders with 2 decimals. Crypto precision is tiered by magnitude,
/// reflecting typical denomination granularity: 8 decimals below 0.0001,
/// 6 below 1, 4 otherwise.
pub fn decimal_places(currency_code: &str, amount: Decimal) -> u32 {
    match currency_kind(currency_code) {
        CurrencyKind::Fiat => FIAT_DECIMAL_PRECISION,
        CurrencyKind::Crypto => {
            let magnitude = amount.abs();
            if magnitude < Decimal::new(1, 4) {
                8
            } else if magnitude < Decimal::ONE {
                6
            } else {
                4
            }
        }
    }
}

/// Renders an amount with its currency code, e.g. `"123.45 USD"`.
pub fn format_amount(amount: Decimal, currency_code: &str) -> String {
    let places = decimal_places(currency_code, amount) as usize;
    format!("{:.*} {}", places, amount, currency_code.to_uppercase())
}
