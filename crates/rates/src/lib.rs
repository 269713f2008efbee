//! Centavo Rates Crate
//!
//! Provider-agnostic exchange rate fetching for the Centavo engine.
//!
//! # Overview
//!
//! The rates crate supports:
//! - Fiat/fiat rates from a base-keyed JSON rate table
//! - Crypto spot prices against fiat or other crypto
//! - A router that picks the right strategy per currency pair
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Engine (fx)    | --> |    RateRouter    |  (pair strategy dispatch)
//! +------------------+     +------------------+
//!                             |            |
//!                             v            v
//!                  +---------------+  +----------------+
//!                  | FiatProvider  |  | CryptoProvider |
//!                  +---------------+  +----------------+
//! ```
//!
//! # Core Types
//!
//! - [`RateProvider`] - Trait implemented by every rate source
//! - [`RateRouter`] - Four-way fiat/crypto dispatch over the providers
//! - [`CurrencyKind`] - Fiat vs. recognized crypto ticker classification
//! - [`RateError`] - Transport and shape failures

pub mod errors;
pub mod models;
pub mod provider;
pub mod router;

pub use errors::RateError;
pub use models::{coin_id, currency_kind, CurrencyKind};
pub use provider::{CryptoRateProvider, FiatRateProvider, RateProvider};
pub use router::RateRouter;
