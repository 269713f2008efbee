//! Audit changeset construction.
//!
//! Pure comparison of two tracked-field snapshots. Appending the result to
//! an entry's history is the entry service's job; this module never
//! mutates anything and never fails.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::entries::{Entry, EntryKind, Frequency};

use super::field_format;
use super::{AuditEntry, AuditKind, FieldChange};

/// The tracked fields of an entry, extracted for diffing.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSnapshot {
    pub title: String,
    pub value: Decimal,
    pub currency_code: String,
    pub primary_date: Option<NaiveDate>,
    pub secondary_date: Option<NaiveDate>,
    pub completed: bool,
    pub frequency: Option<Frequency>,
    pub count: Option<u32>,
}

impl From<&Entry> for FieldSnapshot {
    fn from(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            value: entry.value,
            currency_code: entry.currency_code.clone(),
            primary_date: entry.primary_date,
            secondary_date: entry.secondary_date,
            completed: entry.completed,
            frequency: entry.recurrence.map(|r| r.frequency),
            count: entry.recurrence.map(|r| r.count),
        }
    }
}

/// Builds the audit entry for one save.
///
/// With no previous snapshot this is a `Create` entry holding every
/// tracked field's formatted value and no `from`. Otherwise it is an
/// `Update` entry holding only the fields that actually changed.
pub fn record_change(
    kind: EntryKind,
    previous: Option<&FieldSnapshot>,
    next: &FieldSnapshot,
) -> AuditEntry {
    let mut changes = BTreeMap::new();

    for field in tracked_fields(kind) {
        let to = field.format(kind, next);
        match previous {
            None => {
                changes.insert(
                    field.name.to_string(),
                    FieldChange {
                        label: field.label(kind).to_string(),
                        from: None,
                        to,
                    },
                );
            }
            Some(prev) => {
                if field.differs(prev, next) {
                    changes.insert(
                        field.name.to_string(),
                        FieldChange {
                            label: field.label(kind).to_string(),
                            from: Some(field.format(kind, prev)),
                            to,
                        },
                    );
                }
            }
        }
    }

    AuditEntry {
        timestamp: Utc::now(),
        kind: if previous.is_none() {
            AuditKind::Create
        } else {
            AuditKind::Update
        },
        changes,
    }
}

struct TrackedField {
    name: &'static str,
    differs: fn(&FieldSnapshot, &FieldSnapshot) -> bool,
    format: fn(EntryKind, &FieldSnapshot) -> String,
    label: fn(EntryKind) -> &'static str,
}

impl TrackedField {
    fn differs(&self, prev: &FieldSnapshot, next: &FieldSnapshot) -> bool {
        (self.differs)(prev, next)
    }

    fn format(&self, kind: EntryKind, snapshot: &FieldSnapshot) -> String {
        (self.format)(kind, snapshot)
    }

    fn label(&self, kind: EntryKind) -> &'static str {
        (self.label)(kind)
    }
}

fn tracked_fields(kind: EntryKind) -> Vec<TrackedField> {
    let mut fields = vec![
        TrackedField {
            name: "title",
            differs: |p, n| p.title != n.title,
            format: |_, s| field_format::text(&s.title),
            label: |_| "Title",
        },
        TrackedField {
            name: "value",
            differs: |p, n| p.value != n.value,
            format: |_, s| field_format::amount(s.value, &s.currency_code),
            label: |_| "Amount",
        },
        TrackedField {
            name: "currencyCode",
            differs: |p, n| p.currency_code != n.currency_code,
            format: |_, s| field_format::text(&s.currency_code),
            label: |_| "Currency",
        },
        TrackedField {
            name: "primaryDate",
            differs: |p, n| p.primary_date != n.primary_date,
            format: |_, s| field_format::long_date(s.primary_date),
            label: |kind| match kind {
                EntryKind::Expense => "Due date",
                EntryKind::Income => "Receipt date",
                EntryKind::Investment => "Start date",
            },
        },
        TrackedField {
            name: "secondaryDate",
            differs: |p, n| p.secondary_date != n.secondary_date,
            format: |_, s| field_format::long_date(s.secondary_date),
            label: |_| "End date",
        },
        TrackedField {
            name: "frequency",
            differs: |p, n| p.frequency != n.frequency,
            format: |_, s| match s.frequency {
                Some(f) => f.as_str().to_string(),
                None => field_format::text(""),
            },
            label: |_| "Frequency",
        },
        TrackedField {
            name: "count",
            differs: |p, n| p.count != n.count,
            format: |_, s| field_format::repetitions(s.count),
            label: |_| "Repetitions",
        },
    ];

    // Investments carry no completion flag.
    if kind != EntryKind::Investment {
        fields.push(TrackedField {
            name: "completed",
            differs: |p, n| p.completed != n.completed,
            format: |kind, s| field_format::completion(kind, s.completed),
            label: |kind| match kind {
                EntryKind::Income => "Received",
                _ => "Paid",
            },
        });
    }

    fields
}
