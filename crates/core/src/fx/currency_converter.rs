//! Currency conversion on top of the rate cache.

use rust_decimal::Decimal;
use std::sync::Arc;

use super::rate_cache::ExchangeRateCache;

/// Converts amounts between currency codes.
///
/// Unavailable rates surface as `None`; conversion never returns an error.
pub struct CurrencyConverter {
    cache: Arc<ExchangeRateCache>,
}

impl CurrencyConverter {
    pub fn new(cache: Arc<ExchangeRateCache>) -> Self {
        Self { cache }
    }

    /// Converts `value` from one currency to another at today's rate.
    ///
    /// Identity pairs return the value unchanged without touching the
    /// cache or the network.
    pub async fn convert(&self, value: Decimal, from: &str, to: &str) -> Option<Decimal> {
        if from.eq_ignore_ascii_case(to) {
            return Some(value);
        }

        let rate = self.cache.rate_for_today(from, to).await?;
        Some(value * rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::RateCacheConfig;
    use async_trait::async_trait;
    use centavo_rates::{RateError, RateProvider};
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        rate: Option<Decimal>,
        fetch_count: AtomicUsize,
    }

    #[async_trait]
    impl RateProvider for CountingProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn fetch_rate(&self, _from: &str, _to: &str) -> Result<Option<Decimal>, RateError> {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);
            Ok(self.rate)
        }
    }

    fn converter(rate: Option<Decimal>) -> (CurrencyConverter, Arc<CountingProvider>) {
        let provider = Arc::new(CountingProvider {
            rate,
            fetch_count: AtomicUsize::new(0),
        });
        let cache = Arc::new(ExchangeRateCache::new(
            provider.clone(),
            RateCacheConfig::default(),
        ));
        (CurrencyConverter::new(cache), provider)
    }

    #[tokio::test]
    async fn test_identity_conversion_skips_fetch() {
        let (converter, provider) = converter(Some(dec!(5)));
        assert_eq!(
            converter.convert(dec!(100), "USD", "USD").await,
            Some(dec!(100))
        );
        assert_eq!(
            converter.convert(dec!(100), "usd", "USD").await,
            Some(dec!(100))
        );
        assert_eq!(provider.fetch_count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_converts_through_rate() {
        let (converter, _) = converter(Some(dec!(5.43)));
        assert_eq!(
            converter.convert(dec!(100), "USD", "BRL").await,
            Some(dec!(543.00))
        );
    }

    #[tokio::test]
    async fn test_unavailable_rate_is_none() {
        let (converter, _) = converter(None);
        assert_eq!(converter.convert(dec!(100), "USD", "BRL").await, None);
    }
}
