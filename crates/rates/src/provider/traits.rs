//! Rate provider trait definition.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::RateError;

/// Trait for exchange rate sources.
///
/// Implement this trait to add support for a new rate source. The engine
/// only ever talks to this contract; the router and both concrete
/// providers implement it.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "OPEN_ER_API" or "COINGECKO".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the spot rate from one currency to another.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(rate))` - one unit of `from` is worth `rate` units of `to`
    /// - `Ok(None)` - the provider answered but does not quote this pair
    /// - `Err(_)` - transport failure or malformed response
    async fn fetch_rate(&self, from: &str, to: &str) -> Result<Option<Decimal>, RateError>;
}
