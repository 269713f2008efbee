//! Subscription registry with disposable handles.
//!
//! Listeners register a callback and get back a [`Subscription`] handle;
//! dropping the handle unsubscribes. Handles carry the registration id, so
//! unsubscribing never depends on matching a closure by identity - a
//! listener that registers an anonymous closure cannot leak its slot by
//! failing to present the same closure again.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use log::warn;

use super::{DomainEvent, DomainEventSink};

type Callback = Box<dyn Fn(&DomainEvent) + Send + Sync>;
type CallbackMap = Mutex<HashMap<u64, Callback>>;

/// In-process pub/sub registry for domain events.
///
/// Implements [`DomainEventSink`], so it can be injected anywhere a sink
/// is expected; `emit` fans the event out to every live subscription.
#[derive(Clone, Default)]
pub struct SubscriptionRegistry {
    callbacks: Arc<CallbackMap>,
    next_id: Arc<AtomicU64>,
}

/// Handle returned by [`SubscriptionRegistry::subscribe`].
///
/// The subscription stays active for the lifetime of the handle; dropping
/// it (or calling [`Subscription::dispose`]) removes the callback.
pub struct Subscription {
    id: u64,
    callbacks: Weak<CallbackMap>,
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback and returns its disposable handle.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&DomainEvent) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.callbacks
            .lock()
            .unwrap()
            .insert(id, Box::new(callback));

        Subscription {
            id,
            callbacks: Arc::downgrade(&self.callbacks),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.callbacks.lock().unwrap().len()
    }
}

impl DomainEventSink for SubscriptionRegistry {
    fn emit(&self, event: DomainEvent) {
        let callbacks = match self.callbacks.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("Subscription registry lock poisoned; delivering anyway");
                poisoned.into_inner()
            }
        };
        for callback in callbacks.values() {
            callback(&event);
        }
    }
}

impl Subscription {
    /// Explicitly ends the subscription. Equivalent to dropping the handle.
    pub fn dispose(self) {}

    fn remove(&self) {
        if let Some(callbacks) = self.callbacks.upgrade() {
            if let Ok(mut guard) = callbacks.lock() {
                guard.remove(&self.id);
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::EntryKind;
    use std::sync::atomic::AtomicUsize;

    fn sample_event() -> DomainEvent {
        DomainEvent::entries_changed(EntryKind::Expense, vec!["x".to_string()])
    }

    #[test]
    fn test_subscribe_receives_events() {
        let registry = SubscriptionRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let hits_clone = hits.clone();
        let _sub = registry.subscribe(move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        registry.emit(sample_event());
        registry.emit(sample_event());
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_dropping_handle_unsubscribes() {
        let registry = SubscriptionRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let hits_clone = hits.clone();
        let sub = registry.subscribe(move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(registry.subscriber_count(), 1);

        drop(sub);
        assert_eq!(registry.subscriber_count(), 0);

        registry.emit(sample_event());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_dispose_is_drop() {
        let registry = SubscriptionRegistry::new();
        let sub = registry.subscribe(|_| {});
        sub.dispose();
        assert_eq!(registry.subscriber_count(), 0);
    }

    #[test]
    fn test_independent_handles() {
        let registry = SubscriptionRegistry::new();
        let first = registry.subscribe(|_| {});
        let second = registry.subscribe(|_| {});
        drop(first);
        assert_eq!(registry.subscriber_count(), 1);
        drop(second);
        assert_eq!(registry.subscriber_count(), 0);
    }
}
