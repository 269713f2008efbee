//! Entries module - domain models, lifecycle service, and traits.

mod entries_errors;
mod entries_model;
mod entries_service;
mod entries_traits;

pub use entries_errors::EntryError;
pub use entries_model::{Entry, EntryDraft, EntryKind, Frequency, Occurrence, Recurrence};
pub use entries_service::EntryService;
pub use entries_traits::{EntryRepositoryTrait, EntryServiceTrait};
