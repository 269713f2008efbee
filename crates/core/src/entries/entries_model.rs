//! Entry domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::history::AuditEntry;

/// Entry variant tag.
///
/// The three variants share the same shape and almost all logic; what
/// differs is vocabulary (an expense is "paid", an income is "received")
/// and a couple of variant-only fields. Label resolution happens at the
/// presentation boundary, never in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Expense,
    Income,
    Investment,
}

impl EntryKind {
    /// Vocabulary for the completion flag, resolved per variant.
    ///
    /// Investments carry no completion flag; the generic pair is a
    /// defensive fallback and never reaches the UI for them.
    pub fn completion_words(&self) -> (&'static str, &'static str) {
        match self {
            EntryKind::Expense => ("paid", "unpaid"),
            EntryKind::Income => ("received", "pending"),
            EntryKind::Investment => ("yes", "no"),
        }
    }
}

/// How often a recurring entry repeats.
///
/// `Unknown` absorbs unrecognized persisted values; the generator treats
/// it as a non-advancing step bounded by the safety cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    #[serde(other)]
    Unknown,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
            Frequency::Unknown => "unknown",
        }
    }
}

/// Recurrence settings on an entry. `count == 0` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurrence {
    pub frequency: Frequency,
    pub count: u32,
}

/// One concrete date instance generated from a recurring entry.
///
/// Each occurrence carries its own completion flag, independent of the
/// entry-level flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub date: NaiveDate,
    pub completed: bool,
}

/// Domain model representing one financial entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub kind: EntryKind,
    pub title: String,
    /// Non-negative amount; the sign is implied by the variant.
    pub value: Decimal,
    /// ISO fiat code or crypto ticker.
    pub currency_code: String,
    /// Due date for expenses/incomes, start date for investments.
    pub primary_date: Option<NaiveDate>,
    /// End/period date, where the variant has one.
    pub secondary_date: Option<NaiveDate>,
    /// Immutable once set.
    pub created_at: DateTime<Utc>,
    /// Append-only audit trail, oldest first.
    pub history: Vec<AuditEntry>,
    pub recurrence: Option<Recurrence>,
    /// Generated occurrence list; empty for non-recurring entries.
    pub occurrences: Vec<Occurrence>,
    /// Entry-level completion flag ("paid"/"received").
    pub completed: bool,
    /// Investment-only.
    pub interest_rate: Option<Decimal>,
}

impl Entry {
    /// True when the entry has a recurrence setting.
    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }
}

/// Input model for creating or updating an entry.
///
/// `id: None` means create; otherwise the draft replaces the stored
/// snapshot with the same id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub id: Option<String>,
    pub kind: EntryKind,
    pub title: String,
    pub value: Decimal,
    pub currency_code: String,
    pub primary_date: Option<NaiveDate>,
    pub secondary_date: Option<NaiveDate>,
    pub recurrence: Option<Recurrence>,
    pub completed: bool,
    pub interest_rate: Option<Decimal>,
}
