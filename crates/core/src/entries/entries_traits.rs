//! Entry repository and service traits.

use async_trait::async_trait;

use crate::entries::entries_model::{Entry, EntryDraft};
use crate::errors::Result;

/// The opaque external store, one instance per entry variant.
///
/// The engine assumes nothing about the backend beyond these three
/// operations and performs no validation of persisted data beyond
/// defensive defaults. Each `save`/`delete` is an independent atomic
/// single-entity operation; the engine never coordinates multi-entity
/// transactions.
#[async_trait]
pub trait EntryRepositoryTrait: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Entry>>;
    async fn save(&self, entry: &Entry) -> Result<()>;
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Trait for entry lifecycle operations.
#[async_trait]
pub trait EntryServiceTrait: Send + Sync {
    async fn list_entries(&self) -> Result<Vec<Entry>>;
    async fn save_entry(&self, draft: EntryDraft) -> Result<Entry>;
    async fn set_completed(&self, id: &str, completed: bool) -> Result<Entry>;
    async fn toggle_occurrence(&self, id: &str, index: usize) -> Result<Entry>;
    async fn delete_entry(&self, id: &str) -> Result<()>;
    async fn delete_entries(&self, ids: &[String]) -> Result<usize>;
}
