//! Totals domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregated amounts for one currency code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyTotals {
    /// Sum of `value` across all entries in this currency.
    pub total: Decimal,
    /// Sum of `value` across recurring entries, counted once per entry.
    pub estimated_total: Decimal,
    /// Number of entries in this currency.
    pub items_count: u32,
    /// Number of recurring entries in this currency.
    pub recurrences_count: u32,
}

/// Per-currency totals; currencies with no entries are absent, never zero.
pub type TotalsByCurrency = HashMap<String, CurrencyTotals>;

/// Cross-currency rollup of one domain's totals into the base currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeRollup {
    pub base_currency: String,
    pub totals: TotalsByCurrency,
    /// Grand total expressed in the base currency. Currencies whose rate
    /// was unavailable are excluded and listed below.
    pub converted_total: Decimal,
    /// Recurring estimate expressed in the base currency.
    pub converted_estimated_total: Decimal,
    /// Currency codes that could not be converted this pass.
    pub unavailable: Vec<String>,
}
