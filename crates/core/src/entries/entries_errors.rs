//! Entry error types.

use thiserror::Error;

/// Errors from entry lifecycle operations.
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("Entry not found: {0}")]
    NotFound(String),

    #[error("Occurrence index {index} out of range for entry {entry_id}")]
    OccurrenceOutOfRange { entry_id: String, index: usize },
}
