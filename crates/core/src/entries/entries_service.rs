//! Entry lifecycle orchestration.

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use std::sync::Arc;
use uuid::Uuid;

use crate::entries::entries_errors::EntryError;
use crate::entries::entries_model::{Entry, EntryDraft};
use crate::entries::{EntryRepositoryTrait, EntryServiceTrait};
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::history::{record_change, FieldSnapshot};
use crate::recurrence::generate_occurrences;
use crate::Result;

/// Service for managing entries of one variant.
///
/// The store behind `repository` holds a single entry variant; the engine
/// runs one service instance per variant, mirroring the per-type stores.
pub struct EntryService {
    repository: Arc<dyn EntryRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl EntryService {
    /// Creates a new EntryService instance with an injected store.
    pub fn new(repository: Arc<dyn EntryRepositoryTrait>) -> Self {
        Self {
            repository,
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    /// Sets the domain event sink for this service.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    async fn find_entry(&self, id: &str) -> Result<Entry> {
        self.repository
            .get_all()
            .await?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| EntryError::NotFound(id.to_string()).into())
    }

    /// True when a field that feeds occurrence generation changed.
    fn recurrence_affected(previous: &Entry, next: &Entry) -> bool {
        previous.primary_date != next.primary_date
            || previous.secondary_date != next.secondary_date
            || previous.recurrence != next.recurrence
    }

    fn regenerate_occurrences(entry: &mut Entry) {
        entry.occurrences = match (entry.recurrence, entry.primary_date) {
            (Some(recurrence), Some(start)) => generate_occurrences(
                start,
                recurrence.frequency,
                recurrence.count,
                entry.secondary_date,
            ),
            _ => Vec::new(),
        };
    }

    async fn persist_and_emit(&self, entry: Entry) -> Result<Entry> {
        self.repository.save(&entry).await?;
        self.event_sink.emit(DomainEvent::entries_changed(
            entry.kind,
            vec![entry.id.clone()],
        ));
        Ok(entry)
    }
}

#[async_trait]
impl EntryServiceTrait for EntryService {
    async fn list_entries(&self) -> Result<Vec<Entry>> {
        self.repository.get_all().await
    }

    async fn save_entry(&self, draft: EntryDraft) -> Result<Entry> {
        let previous = match &draft.id {
            Some(id) => self
                .repository
                .get_all()
                .await?
                .into_iter()
                .find(|e| e.id == *id),
            None => None,
        };

        let mut next = Entry {
            id: draft
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            kind: draft.kind,
            title: draft.title,
            value: draft.value,
            currency_code: draft.currency_code,
            primary_date: draft.primary_date,
            secondary_date: draft.secondary_date,
            created_at: previous
                .as_ref()
                .map(|p| p.created_at)
                .unwrap_or_else(Utc::now),
            history: previous.as_ref().map(|p| p.history.clone()).unwrap_or_default(),
            recurrence: draft.recurrence,
            occurrences: previous
                .as_ref()
                .map(|p| p.occurrences.clone())
                .unwrap_or_default(),
            completed: draft.completed,
            interest_rate: draft.interest_rate,
        };

        let previous_snapshot = previous.as_ref().map(FieldSnapshot::from);
        let audit = record_change(
            next.kind,
            previous_snapshot.as_ref(),
            &FieldSnapshot::from(&next),
        );
        // A save that changed nothing appends no update entry.
        if previous.is_none() || !audit.changes.is_empty() {
            next.history.push(audit);
        }

        let regenerate = match &previous {
            None => true,
            Some(prev) => Self::recurrence_affected(prev, &next),
        };
        if regenerate {
            debug!("Regenerating occurrences for entry {}", next.id);
            Self::regenerate_occurrences(&mut next);
        }

        self.persist_and_emit(next).await
    }

    async fn set_completed(&self, id: &str, completed: bool) -> Result<Entry> {
        let previous = self.find_entry(id).await?;
        let mut next = previous.clone();
        next.completed = completed;

        let audit = record_change(
            next.kind,
            Some(&FieldSnapshot::from(&previous)),
            &FieldSnapshot::from(&next),
        );
        if !audit.changes.is_empty() {
            next.history.push(audit);
        }

        self.persist_and_emit(next).await
    }

    async fn toggle_occurrence(&self, id: &str, index: usize) -> Result<Entry> {
        let mut entry = self.find_entry(id).await?;

        let occurrence =
            entry
                .occurrences
                .get_mut(index)
                .ok_or_else(|| EntryError::OccurrenceOutOfRange {
                    entry_id: id.to_string(),
                    index,
                })?;
        // Occurrence completion is its own axis, independent of the
        // entry-level flag.
        occurrence.completed = !occurrence.completed;

        self.persist_and_emit(entry).await
    }

    async fn delete_entry(&self, id: &str) -> Result<()> {
        let entry = self.find_entry(id).await?;
        self.repository.delete(id).await?;
        self.event_sink
            .emit(DomainEvent::entries_changed(entry.kind, vec![id.to_string()]));
        Ok(())
    }

    async fn delete_entries(&self, ids: &[String]) -> Result<usize> {
        // N independent deletes; no all-or-nothing guarantee.
        let mut deleted = Vec::new();
        for id in ids {
            match self.delete_entry(id).await {
                Ok(()) => deleted.push(id.clone()),
                Err(e) => warn!("Failed to delete entry {}: {}", id, e),
            }
        }
        Ok(deleted.len())
    }
}
