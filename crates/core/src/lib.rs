//! Centavo Core - Domain entities, services, and traits.
//!
//! This crate contains the recurring transaction and multi-currency
//! valuation engine. It is storage-agnostic: persistence is an opaque
//! async store behind [`entries::EntryRepositoryTrait`], and exchange
//! rates come from the `centavo-rates` provider crate.

pub mod constants;
pub mod entries;
pub mod errors;
pub mod events;
pub mod fx;
pub mod history;
pub mod recurrence;
pub mod settings;
pub mod status;
pub mod totals;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
