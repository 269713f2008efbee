//! Domain event types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entries::EntryKind;

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about domain data changes. The
/// presentation layer translates them into re-renders; nothing in the
/// engine reacts to its own events.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Entries were created, updated, or deleted.
    EntriesChanged {
        kind: EntryKind,
        entry_ids: Vec<String>,
    },

    /// An exchange rate was fetched and cached.
    RateCached {
        from_currency: String,
        to_currency: String,
        day: NaiveDate,
    },

    /// A totals rollup finished and was published.
    TotalsUpdated { base_currency: String },
}

impl DomainEvent {
    /// Convenience constructor for entry mutations.
    pub fn entries_changed(kind: EntryKind, entry_ids: Vec<String>) -> Self {
        Self::EntriesChanged { kind, entry_ids }
    }
}
