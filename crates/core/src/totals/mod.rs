//! Totals module - per-currency aggregation and the base-currency rollup.

mod totals_model;
mod totals_service;

pub use totals_model::{CurrencyTotals, HomeRollup, TotalsByCurrency};
pub use totals_service::{aggregate, TotalsService};
