//! Currency classification and provider identifier mapping.
//!
//! Currency codes arrive as user-entered tickers: ISO 4217 codes for fiat
//! ("USD", "BRL") and exchange tickers for crypto ("BTC", "ETH"). Providers
//! key crypto quotes by their own coin identifiers, so the mapping lives
//! here and nothing outside this crate ever sees a provider id.

use serde::{Deserialize, Serialize};

/// Classification of a currency code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyKind {
    /// ISO 4217 fiat currency.
    Fiat,
    /// Recognized cryptocurrency ticker.
    Crypto,
}

/// Ticker -> provider coin identifier table.
///
/// Unlisted tickers are treated as fiat by [`currency_kind`].
const COIN_IDS: &[(&str, &str)] = &[
    ("BTC", "bitcoin"),
    ("ETH", "ethereum"),
    ("USDT", "tether"),
    ("BNB", "binancecoin"),
    ("SOL", "solana"),
    ("XRP", "ripple"),
    ("USDC", "usd-coin"),
    ("ADA", "cardano"),
    ("DOGE", "dogecoin"),
    ("DOT", "polkadot"),
    ("LTC", "litecoin"),
    ("MATIC", "matic-network"),
    ("AVAX", "avalanche-2"),
    ("LINK", "chainlink"),
    ("XLM", "stellar"),
    ("XMR", "monero"),
    ("TRX", "tron"),
];

/// Classifies a currency code as fiat or crypto.
///
/// The comparison is case-insensitive. Anything outside the recognized
/// crypto ticker set is assumed to be fiat; unknown fiat codes surface
/// later as a missing rate, not as an error here.
pub fn currency_kind(code: &str) -> CurrencyKind {
    if coin_id(code).is_some() {
        CurrencyKind::Crypto
    } else {
        CurrencyKind::Fiat
    }
}

/// Returns the provider coin identifier for a crypto ticker, if recognized.
pub fn coin_id(ticker: &str) -> Option<&'static str> {
    let upper = ticker.to_uppercase();
    COIN_IDS
        .iter()
        .find(|(t, _)| *t == upper)
        .map(|(_, id)| *id)
}
