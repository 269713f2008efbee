//! FX module - exchange rate caching and currency conversion.

pub mod currency;
mod currency_converter;
mod rate_cache;

pub use currency::{decimal_places, format_amount, reference_business_day};
pub use currency_converter::CurrencyConverter;
pub use rate_cache::{ExchangeRateCache, RateCacheConfig, RateKey};
