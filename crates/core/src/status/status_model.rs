//! Status domain models.

use serde::{Deserialize, Serialize};

/// Variant-neutral status category.
///
/// The categories overlap across entry variants with different labels but
/// identical rules; [`super::status_label`] resolves the wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    /// Entry-level flag set, or every occurrence completed.
    Complete,
    /// Primary date is today.
    DueToday,
    /// Primary date has passed and the entry is not complete.
    Overdue,
    /// Primary date lies in the future.
    Upcoming,
    /// No primary date at all.
    NoDueDate,
    /// Investment whose end date has not passed.
    Active,
    /// Investment whose end date has passed.
    Finished,
}

/// Resolved status for one entry at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryStatus {
    pub category: StatusCategory,
    /// Day-count hint for upcoming entries.
    pub days_until: Option<i64>,
}

impl EntryStatus {
    pub(crate) fn of(category: StatusCategory) -> Self {
        Self {
            category,
            days_until: None,
        }
    }
}
