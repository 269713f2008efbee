//! Fiat exchange rate provider.
//!
//! Fetches a full rate table keyed by base currency from the Open ER API
//! and picks the requested target out of the returned map. One request per
//! (base, day) would be enough to serve every target, but caching is the
//! engine's concern, not the provider's.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::RateError;
use crate::provider::RateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "OPEN_ER_API";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// API response: `{ "result": "success", "rates": { "USD": 1.0, ... } }`
#[derive(Debug, Deserialize)]
struct FiatRateResponse {
    result: String,
    #[serde(default)]
    rates: HashMap<String, Decimal>,
}

/// Fiat-to-fiat rate provider backed by a base-keyed JSON rate table.
pub struct FiatRateProvider {
    client: Client,
    base_url: String,
}

impl Default for FiatRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FiatRateProvider {
    /// Create a new fiat rate provider.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: "https://open.er-api.com/v6/latest".to_string(),
        }
    }

    /// Picks the target rate out of a parsed response.
    fn extract_rate(response: &FiatRateResponse, to: &str) -> Option<Decimal> {
        if response.result != "success" {
            return None;
        }
        response.rates.get(&to.to_uppercase()).copied()
    }
}

#[async_trait]
impl RateProvider for FiatRateProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_rate(&self, from: &str, to: &str) -> Result<Option<Decimal>, RateError> {
        let url = format!("{}/{}", self.base_url, from.to_uppercase());

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

        let body: FiatRateResponse =
            response
                .json()
                .await
                .map_err(|e| RateError::MalformedResponse {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                })?;

        Ok(Self::extract_rate(&body, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_response() -> FiatRateResponse {
        serde_json::from_str(
            r#"{"result":"success","rates":{"USD":1.0,"BRL":5.43,"EUR":0.92}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_extract_rate_finds_target() {
        let response = sample_response();
        assert_eq!(
            FiatRateProvider::extract_rate(&response, "brl"),
            Some(dec!(5.43))
        );
    }

    #[test]
    fn test_extract_rate_missing_target() {
        let response = sample_response();
        assert_eq!(FiatRateProvider::extract_rate(&response, "JPY"), None);
    }

    #[test]
    fn test_extract_rate_unsuccessful_result() {
        let response: FiatRateResponse =
            serde_json::from_str(r#"{"result":"error"}"#).unwrap();
        assert_eq!(FiatRateProvider::extract_rate(&response, "USD"), None);
    }
}
