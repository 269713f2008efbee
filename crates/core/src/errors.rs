//! Core error types for the Centavo engine.
//!
//! This module defines storage-agnostic error types. Provider-specific
//! errors from the rates crate never cross the converter boundary (they
//! degrade to "rate unavailable"); everything else is folded in here.

use thiserror::Error;

use crate::entries::EntryError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
///
/// `Repository` is the variant store implementations surface their
/// save/delete rejections through; the engine never constructs it itself.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Entry error: {0}")]
    Entry(#[from] EntryError),

    #[error("Repository error: {0}")]
    Repository(String),
}
