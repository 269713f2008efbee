//! Rate provider abstractions and implementations.
//!
//! This module contains:
//! - The [`RateProvider`] trait that all rate sources implement
//! - The fiat provider (base-keyed JSON rate table)
//! - The crypto provider (coin-id keyed spot prices)
//!
//! Pair strategy selection (fiat vs. crypto on each side) happens in the
//! [`crate::router`] module, not in the providers themselves.

mod crypto;
mod fiat;
mod traits;

pub use crypto::CryptoRateProvider;
pub use fiat::FiatRateProvider;
pub use traits::RateProvider;
