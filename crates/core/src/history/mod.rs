//! History module - append-only audit trail construction.

mod field_format;
mod history_model;
mod history_recorder;

pub use history_model::{AuditEntry, AuditKind, FieldChange};
pub use history_recorder::{record_change, FieldSnapshot};
