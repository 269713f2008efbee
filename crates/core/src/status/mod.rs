//! Status module - temporal status derivation for entries.

mod status_model;
mod status_resolver;

pub use status_model::{EntryStatus, StatusCategory};
pub use status_resolver::{resolve_status, status_label};
