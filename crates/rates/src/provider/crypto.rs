//! Crypto spot price provider.
//!
//! Fetches spot prices from the CoinGecko simple-price endpoint, keyed by
//! provider coin identifier. The ticker-to-identifier mapping lives in
//! [`crate::models`]; callers pass plain tickers.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::RateError;
use crate::models::coin_id;
use crate::provider::RateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "COINGECKO";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// API response: `{ "bitcoin": { "usd": 64000.12 } }`
type CryptoPriceResponse = HashMap<String, HashMap<String, Decimal>>;

/// Crypto spot price provider.
///
/// `fetch_rate` expects `from` to be a recognized crypto ticker and `to`
/// to be a fiat code understood by the endpoint's `vs_currencies`
/// parameter. Inverted and cross pairs are the router's job.
pub struct CryptoRateProvider {
    client: Client,
    base_url: String,
}

impl Default for CryptoRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CryptoRateProvider {
    /// Create a new crypto spot price provider.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: "https://api.coingecko.com/api/v3/simple/price".to_string(),
        }
    }

    /// Picks the requested quote out of a parsed response.
    fn extract_rate(response: &CryptoPriceResponse, coin: &str, vs: &str) -> Option<Decimal> {
        response
            .get(coin)
            .and_then(|quotes| quotes.get(&vs.to_lowercase()))
            .copied()
    }
}

#[async_trait]
impl RateProvider for CryptoRateProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_rate(&self, from: &str, to: &str) -> Result<Option<Decimal>, RateError> {
        let coin = match coin_id(from) {
            Some(id) => id,
            None => return Err(RateError::UnknownTicker(from.to_string())),
        };
        let vs = to.to_lowercase();

        let url = format!("{}?ids={}&vs_currencies={}", self.base_url, coin, vs);

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| RateError::RequestFailed {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::BadStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body: CryptoPriceResponse =
            response
                .json()
                .await
                .map_err(|e| RateError::MalformedResponse {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                })?;

        Ok(Self::extract_rate(&body, coin, &vs))
    }
}
