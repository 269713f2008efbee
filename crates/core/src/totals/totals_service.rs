//! Per-currency aggregation and the base-currency rollup service.

use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::entries::Entry;
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::fx::CurrencyConverter;

use super::{CurrencyTotals, HomeRollup, TotalsByCurrency};

/// Sums one domain's entry list into per-currency buckets.
///
/// Pure and synchronous. The estimated total adds each recurring entry's
/// nominal value once - it is a "per cycle" figure, not a projection of
/// remaining occurrence values.
pub fn aggregate(entries: &[Entry]) -> TotalsByCurrency {
    let mut totals: TotalsByCurrency = HashMap::new();

    for entry in entries {
        let bucket = totals
            .entry(entry.currency_code.to_uppercase())
            .or_insert_with(CurrencyTotals::default);

        bucket.total += entry.value;
        bucket.items_count += 1;
        if entry.is_recurring() {
            bucket.estimated_total += entry.value;
            bucket.recurrences_count += 1;
        }
    }

    totals
}

/// Recomputes and publishes cross-currency rollups.
///
/// Callers trigger [`TotalsService::recompute`] on entry create, update,
/// and delete. Currency visibility toggles and language changes are pure
/// display concerns and must not trigger a recompute.
pub struct TotalsService {
    converter: Arc<CurrencyConverter>,
    event_sink: Arc<dyn DomainEventSink>,
    /// Monotonic pass token; a finished pass only publishes if no newer
    /// pass has started since.
    recompute_seq: AtomicU64,
    latest: Mutex<Option<HomeRollup>>,
}

impl TotalsService {
    pub fn new(converter: Arc<CurrencyConverter>) -> Self {
        Self {
            converter,
            event_sink: Arc::new(NoOpDomainEventSink),
            recompute_seq: AtomicU64::new(0),
            latest: Mutex::new(None),
        }
    }

    /// Sets the domain event sink for this service.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    /// The most recently published rollup, if any.
    pub fn latest_rollup(&self) -> Option<HomeRollup> {
        self.latest.lock().unwrap().clone()
    }

    /// Aggregates `entries` and converts the totals into `base_currency`.
    ///
    /// Conversions run sequentially; the per-currency rate is memoized for
    /// the duration of the pass so no currency is converted twice. A pass
    /// that finishes after a newer pass has started publishes nothing and
    /// returns `None` - the stale result never overwrites the newer one.
    pub async fn recompute(&self, entries: &[Entry], base_currency: &str) -> Option<HomeRollup> {
        let seq = self.recompute_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let base = base_currency.to_uppercase();

        let totals = aggregate(entries);

        // Deterministic conversion order keeps logs and tests stable.
        let mut codes: Vec<&String> = totals.keys().collect();
        codes.sort();

        let mut rate_memo: HashMap<String, Option<Decimal>> = HashMap::new();
        let mut converted_total = Decimal::ZERO;
        let mut converted_estimated_total = Decimal::ZERO;
        let mut unavailable = Vec::new();

        for code in codes {
            let rate = match rate_memo.get(code) {
                Some(rate) => *rate,
                None => {
                    let rate = self.converter.convert(Decimal::ONE, code, &base).await;
                    rate_memo.insert(code.clone(), rate);
                    rate
                }
            };

            let bucket = &totals[code];
            match rate {
                Some(rate) => {
                    converted_total += bucket.total * rate;
                    converted_estimated_total += bucket.estimated_total * rate;
                }
                None => unavailable.push(code.clone()),
            }
        }

        if self.recompute_seq.load(Ordering::SeqCst) != seq {
            debug!("Discarding stale totals pass {}", seq);
            return None;
        }

        let rollup = HomeRollup {
            base_currency: base.clone(),
            totals,
            converted_total,
            converted_estimated_total,
            unavailable,
        };

        *self.latest.lock().unwrap() = Some(rollup.clone());
        self.event_sink
            .emit(DomainEvent::TotalsUpdated { base_currency: base });

        Some(rollup)
    }
}
