//! Reactive exchange rate cache.
//!
//! Rates are cached per `(from, to, reference business day)` key. A cached
//! rate resolves immediately; an uncached one either joins the in-flight
//! fetch for its key or starts the single fetch itself and publishes the
//! outcome to every waiter over a per-key broadcast channel. Concurrent
//! requests for the same key therefore hit the provider exactly once.
//!
//! The store is an explicit, constructor-injected object with a bounded
//! capacity (FIFO eviction) and a TTL - there is no process-wide shared
//! map. Failed fetches are never cached, so the next request retries.

use chrono::{NaiveDate, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tokio::sync::broadcast;

use centavo_rates::RateProvider;

use crate::constants::{RATE_CACHE_CAPACITY, RATE_CACHE_TTL_SECS};
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};

use super::currency::reference_business_day;

/// Cache key: currency pair plus the reference business day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RateKey {
    pub from: String,
    pub to: String,
    pub day: NaiveDate,
}

impl RateKey {
    /// Builds the key for a pair on a calendar day, rolling weekends back
    /// to Friday.
    pub fn for_day(from: &str, to: &str, day: NaiveDate) -> Self {
        Self {
            from: from.to_uppercase(),
            to: to.to_uppercase(),
            day: reference_business_day(day),
        }
    }
}

/// Bounds for the rate cache store.
#[derive(Debug, Clone, Copy)]
pub struct RateCacheConfig {
    pub capacity: usize,
    pub ttl: Duration,
}

impl Default for RateCacheConfig {
    fn default() -> Self {
        Self {
            capacity: RATE_CACHE_CAPACITY,
            ttl: Duration::from_secs(RATE_CACHE_TTL_SECS),
        }
    }
}

struct CachedRate {
    rate: Decimal,
    inserted_at: Instant,
}

/// Bounded, TTL-expiring rate store. Not shared beyond its cache.
struct CacheStore {
    config: RateCacheConfig,
    rates: HashMap<RateKey, CachedRate>,
    insertion_order: VecDeque<RateKey>,
}

impl CacheStore {
    fn new(config: RateCacheConfig) -> Self {
        Self {
            config,
            rates: HashMap::new(),
            insertion_order: VecDeque::new(),
        }
    }

    fn get(&mut self, key: &RateKey) -> Option<Decimal> {
        match self.rates.get(key) {
            Some(cached) if cached.inserted_at.elapsed() < self.config.ttl => Some(cached.rate),
            Some(_) => {
                self.rates.remove(key);
                self.insertion_order.retain(|k| k != key);
                None
            }
            None => None,
        }
    }

    fn insert(&mut self, key: RateKey, rate: Decimal) {
        if self.rates.contains_key(&key) {
            self.rates.insert(
                key,
                CachedRate {
                    rate,
                    inserted_at: Instant::now(),
                },
            );
            return;
        }

        while self.rates.len() >= self.config.capacity {
            match self.insertion_order.pop_front() {
                Some(oldest) => {
                    self.rates.remove(&oldest);
                }
                None => break,
            }
        }

        self.insertion_order.push_back(key.clone());
        self.rates.insert(
            key,
            CachedRate {
                rate,
                inserted_at: Instant::now(),
            },
        );
    }
}

type InFlightMap = HashMap<RateKey, broadcast::Sender<Option<Decimal>>>;

/// Async cache over a [`RateProvider`].
pub struct ExchangeRateCache {
    provider: Arc<dyn RateProvider>,
    store: Mutex<CacheStore>,
    in_flight: Mutex<InFlightMap>,
    event_sink: Arc<dyn DomainEventSink>,
}

/// Owns a claimed in-flight slot for the duration of a fetch.
///
/// Publishing and clearing the slot happens in `Drop`, so the slot is
/// released even when the claiming future is cancelled mid-fetch (task
/// abort, timeout, `select!`); waiters then observe `None` and the next
/// request starts a fresh fetch instead of parking forever.
struct InFlightClaim<'a> {
    key: &'a RateKey,
    in_flight: &'a Mutex<InFlightMap>,
    outcome: Option<Decimal>,
}

impl Drop for InFlightClaim<'_> {
    fn drop(&mut self) {
        let sender = lock_ignoring_poison(self.in_flight).remove(self.key);
        if let Some(sender) = sender {
            // No receivers is fine - nobody else asked while we fetched.
            let _ = sender.send(self.outcome);
        }
    }
}

impl ExchangeRateCache {
    pub fn new(provider: Arc<dyn RateProvider>, config: RateCacheConfig) -> Self {
        Self {
            provider,
            store: Mutex::new(CacheStore::new(config)),
            in_flight: Mutex::new(HashMap::new()),
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    /// Sets the domain event sink for this cache.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    /// Resolves the rate for a pair keyed to today's reference day.
    pub async fn rate_for_today(&self, from: &str, to: &str) -> Option<Decimal> {
        self.rate_for(from, to, Utc::now().date_naive()).await
    }

    /// Resolves the rate for a pair on a given calendar day.
    ///
    /// Unavailable rates surface as `None`; this method never fails.
    pub async fn rate_for(&self, from: &str, to: &str, day: NaiveDate) -> Option<Decimal> {
        let key = RateKey::for_day(from, to, day);

        if let Some(rate) = lock_ignoring_poison(&self.store).get(&key) {
            return Some(rate);
        }

        // Join the in-flight fetch for this key, or claim it.
        let waiter = {
            let mut in_flight = lock_ignoring_poison(&self.in_flight);
            match in_flight.get(&key) {
                Some(sender) => Some(sender.subscribe()),
                None => {
                    let (sender, _) = broadcast::channel(1);
                    in_flight.insert(key.clone(), sender);
                    None
                }
            }
        };

        if let Some(mut receiver) = waiter {
            debug!("Joining in-flight rate fetch for {}/{}", key.from, key.to);
            return receiver.recv().await.ok().flatten();
        }

        let mut claim = InFlightClaim {
            key: &key,
            in_flight: &self.in_flight,
            outcome: None,
        };

        let fetched = match self.provider.fetch_rate(&key.from, &key.to).await {
            Ok(rate) => rate,
            Err(e) => {
                warn!("Rate fetch failed for {}/{}: {}", key.from, key.to, e);
                None
            }
        };

        if let Some(rate) = fetched {
            lock_ignoring_poison(&self.store).insert(key.clone(), rate);
            self.event_sink.emit(DomainEvent::RateCached {
                from_currency: key.from.clone(),
                to_currency: key.to.clone(),
                day: key.day,
            });
        }

        claim.outcome = fetched;
        fetched
    }
}

/// The cache contract is "never fails", so a poisoned lock is downgraded
/// to its inner state rather than propagated.
fn lock_ignoring_poison<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
