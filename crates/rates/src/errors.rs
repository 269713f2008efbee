//! Error types for the rates crate.

use thiserror::Error;

/// Errors that can occur while fetching exchange rates.
///
/// An `Ok(None)` from a provider means "the provider answered but does not
/// quote this pair"; these errors cover everything else.
#[derive(Error, Debug)]
pub enum RateError {
    /// The HTTP request itself failed (connect, timeout, TLS).
    #[error("Request failed: {provider} - {message}")]
    RequestFailed {
        /// The provider that failed
        provider: String,
        /// The transport error message
        message: String,
    },

    /// The provider returned a non-success status code.
    #[error("Provider {provider} returned HTTP {status}")]
    BadStatus {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The response body could not be parsed into the expected shape.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// The provider that returned the body
        provider: String,
        /// Details of the parse failure
        message: String,
    },

    /// A currency ticker has no provider-side identifier.
    #[error("No provider identifier for ticker: {0}")]
    UnknownTicker(String),
}
