//! Pair strategy routing.
//!
//! Every currency pair falls into one of four strategies depending on which
//! side is fiat and which is a recognized crypto ticker. The router owns
//! both concrete providers and exposes the same [`RateProvider`] contract,
//! so the engine never branches on currency kind itself.

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::errors::RateError;
use crate::models::{currency_kind, CurrencyKind};
use crate::provider::{CryptoRateProvider, FiatRateProvider, RateProvider};

/// Cross currency used to bridge crypto/crypto pairs.
const CROSS_CURRENCY: &str = "USD";

/// Dispatches rate fetches to the fiat or crypto provider per pair.
pub struct RateRouter {
    fiat: Arc<dyn RateProvider>,
    crypto: Arc<dyn RateProvider>,
}

impl Default for RateRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl RateRouter {
    /// Create a router over the default providers.
    pub fn new() -> Self {
        Self {
            fiat: Arc::new(FiatRateProvider::new()),
            crypto: Arc::new(CryptoRateProvider::new()),
        }
    }

    /// Create a router over explicit fiat and crypto legs.
    pub fn with_providers(fiat: Arc<dyn RateProvider>, crypto: Arc<dyn RateProvider>) -> Self {
        Self { fiat, crypto }
    }

    fn invert(rate: Option<Decimal>) -> Option<Decimal> {
        match rate {
            Some(r) if !r.is_zero() => Some(Decimal::ONE / r),
            _ => None,
        }
    }
}

#[async_trait]
impl RateProvider for RateRouter {
    fn id(&self) -> &'static str {
        "RATE_ROUTER"
    }

    async fn fetch_rate(&self, from: &str, to: &str) -> Result<Option<Decimal>, RateError> {
        let pair = (currency_kind(from), currency_kind(to));
        debug!("Routing rate fetch {}/{} as {:?}", from, to, pair);

        match pair {
            (CurrencyKind::Fiat, CurrencyKind::Fiat) => self.fiat.fetch_rate(from, to).await,
            (CurrencyKind::Crypto, CurrencyKind::Fiat) => self.crypto.fetch_rate(from, to).await,
            (CurrencyKind::Fiat, CurrencyKind::Crypto) => {
                // Spot prices are quoted crypto-first; invert the leg.
                let spot = self.crypto.fetch_rate(to, from).await?;
                Ok(Self::invert(spot))
            }
            (CurrencyKind::Crypto, CurrencyKind::Crypto) => {
                let from_leg = self.crypto.fetch_rate(from, CROSS_CURRENCY).await?;
                let to_leg = self.crypto.fetch_rate(to, CROSS_CURRENCY).await?;
                match (from_leg, to_leg) {
                    (Some(f), Some(t)) if !t.is_zero() => Ok(Some(f / t)),
                    _ => Ok(None),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Quote-table provider: answers from a fixed pair map and counts
    /// fetches.
    struct TableProvider {
        quotes: HashMap<(String, String), Decimal>,
        fetch_count: AtomicUsize,
    }

    impl TableProvider {
        fn new(pairs: &[(&str, &str, Decimal)]) -> Arc<Self> {
            Arc::new(Self {
                quotes: pairs
                    .iter()
                    .map(|(f, t, r)| ((f.to_uppercase(), t.to_uppercase()), *r))
                    .collect(),
                fetch_count: AtomicUsize::new(0),
            })
        }

        fn fetches(&self) -> usize {
            self.fetch_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RateProvider for TableProvider {
        fn id(&self) -> &'static str {
            "TABLE"
        }

        async fn fetch_rate(&self, from: &str, to: &str) -> Result<Option<Decimal>, RateError> {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .quotes
                .get(&(from.to_uppercase(), to.to_uppercase()))
                .copied())
        }
    }

    #[test]
    fn test_invert_guards_zero() {
        assert_eq!(RateRouter::invert(Some(Decimal::ZERO)), None);
        assert_eq!(RateRouter::invert(None), None);
        assert_eq!(RateRouter::invert(Some(dec!(4))), Some(dec!(0.25)));
    }

    #[tokio::test]
    async fn test_fiat_pair_uses_the_fiat_leg() {
        let fiat = TableProvider::new(&[("USD", "BRL", dec!(5.43))]);
        let crypto = TableProvider::new(&[]);
        let router = RateRouter::with_providers(fiat.clone(), crypto.clone());

        assert_eq!(
            router.fetch_rate("USD", "BRL").await.unwrap(),
            Some(dec!(5.43))
        );
        assert_eq!(fiat.fetches(), 1);
        assert_eq!(crypto.fetches(), 0);
    }

    #[tokio::test]
    async fn test_crypto_to_fiat_is_the_direct_spot() {
        let fiat = TableProvider::new(&[]);
        let crypto = TableProvider::new(&[("BTC", "USD", dec!(64000))]);
        let router = RateRouter::with_providers(fiat.clone(), crypto.clone());

        assert_eq!(
            router.fetch_rate("BTC", "USD").await.unwrap(),
            Some(dec!(64000))
        );
        assert_eq!(fiat.fetches(), 0);
        assert_eq!(crypto.fetches(), 1);
    }

    #[tokio::test]
    async fn test_fiat_to_crypto_inverts_the_spot() {
        let fiat = TableProvider::new(&[]);
        let crypto = TableProvider::new(&[("BTC", "USD", dec!(50000))]);
        let router = RateRouter::with_providers(fiat, crypto);

        assert_eq!(
            router.fetch_rate("USD", "BTC").await.unwrap(),
            Some(dec!(0.00002))
        );
    }

    #[tokio::test]
    async fn test_fiat_to_crypto_with_zero_spot_is_none() {
        let fiat = TableProvider::new(&[]);
        let crypto = TableProvider::new(&[("BTC", "USD", Decimal::ZERO)]);
        let router = RateRouter::with_providers(fiat, crypto);

        assert_eq!(router.fetch_rate("USD", "BTC").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_crypto_pair_crosses_through_usd() {
        let fiat = TableProvider::new(&[]);
        let crypto = TableProvider::new(&[
            ("BTC", "USD", dec!(50000)),
            ("ETH", "USD", dec!(2500)),
        ]);
        let router = RateRouter::with_providers(fiat.clone(), crypto.clone());

        assert_eq!(
            router.fetch_rate("BTC", "ETH").await.unwrap(),
            Some(dec!(20))
        );
        assert_eq!(crypto.fetches(), 2);
        assert_eq!(fiat.fetches(), 0);
    }

    #[tokio::test]
    async fn test_zero_cross_leg_is_none() {
        let fiat = TableProvider::new(&[]);
        let crypto = TableProvider::new(&[
            ("BTC", "USD", dec!(50000)),
            ("ETH", "USD", Decimal::ZERO),
        ]);
        let router = RateRouter::with_providers(fiat, crypto);

        assert_eq!(router.fetch_rate("BTC", "ETH").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_cross_leg_is_none() {
        let fiat = TableProvider::new(&[]);
        let crypto = TableProvider::new(&[("BTC", "USD", dec!(50000))]);
        let router = RateRouter::with_providers(fiat, crypto);

        assert_eq!(router.fetch_rate("BTC", "DOGE").await.unwrap(), None);
    }
}
