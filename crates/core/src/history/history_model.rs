//! Audit trail domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether an audit entry records the first save or a later edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditKind {
    Create,
    Update,
}

/// One formatted field-level change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChange {
    /// Human-readable field label, variant-aware where wording differs.
    pub label: String,
    /// Absent on `Create` entries; the previous formatted value otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// The current formatted value.
    pub to: String,
}

/// One element of an entry's append-only history.
///
/// Stored in chronological order; consumers sort newest-first for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub kind: AuditKind,
    /// Keyed by field name; only fields that actually differ are present.
    pub changes: BTreeMap<String, FieldChange>,
}
