use indexmap::IndexMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::rules::RuleEntry;

/// Per-exchange state carried from the request phase to the response phase,
/// and from a preflight to its actual request.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExchangeRecord {
    /// The one resolved rule governing the whole exchange.
    pub rule: RuleEntry,
    /// Literal `Origin` header value at request time, echoed into
    /// `allow` responses.
    pub origin: String,
    /// Request headers removed from the preflight's requested-headers list;
    /// the actual request strips the same names.
    pub acrh_omitted: Option<Vec<String>>,
}

impl ExchangeRecord {
    pub(crate) fn new(rule: RuleEntry, origin: String) -> Self {
        Self {
            rule,
            origin,
            acrh_omitted: None,
        }
    }
}

const MAX_PENDING_PREFLIGHTS: usize = 512;
const MAX_PENDING_REQUESTS: usize = 2048;

/// Tracks in-flight exchanges across the host's asynchronous hook calls.
///
/// Two tables run concurrently: pending preflights keyed by the compound
/// initiator/target identity (the host shares no transaction id between a
/// preflight and its actual request), and pending actual requests keyed by
/// transaction id. Both are insertion-ordered and capacity-bounded so that
/// exchanges whose terminal event never arrives are evicted oldest-first
/// instead of accumulating.
#[derive(Debug, Default)]
pub(crate) struct ExchangeCorrelator {
    preflights: Mutex<IndexMap<String, ExchangeRecord>>,
    requests: Mutex<IndexMap<String, ExchangeRecord>>,
}

impl ExchangeCorrelator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_preflight(&self, key: String, record: ExchangeRecord) {
        Self::bounded_insert(&mut lock(&self.preflights), key, record, MAX_PENDING_PREFLIGHTS);
    }

    /// Looks up a pending preflight without consuming it. The preflight's
    /// own response phase must leave the record in place so the carried
    /// `acrh_omitted` can still reach the actual request.
    pub(crate) fn peek_preflight(&self, key: &str) -> Option<ExchangeRecord> {
        lock(&self.preflights).get(key).cloned()
    }

    pub(crate) fn has_preflight(&self, key: &str) -> bool {
        lock(&self.preflights).contains_key(key)
    }

    /// Consumes a pending preflight; called when the actual request for the
    /// same compound key supersedes it.
    pub(crate) fn take_preflight(&self, key: &str) -> Option<ExchangeRecord> {
        lock(&self.preflights).shift_remove(key)
    }

    pub(crate) fn insert_request(&self, id: String, record: ExchangeRecord) {
        Self::bounded_insert(&mut lock(&self.requests), id, record, MAX_PENDING_REQUESTS);
    }

    /// Consumes the record for an actual request; unconditional on the
    /// response phase, whatever the response looks like.
    pub(crate) fn take_request(&self, id: &str) -> Option<ExchangeRecord> {
        lock(&self.requests).shift_remove(id)
    }

    #[cfg(test)]
    pub(crate) fn pending_counts(&self) -> (usize, usize) {
        (lock(&self.preflights).len(), lock(&self.requests).len())
    }

    fn bounded_insert(
        table: &mut IndexMap<String, ExchangeRecord>,
        key: String,
        record: ExchangeRecord,
        capacity: usize,
    ) {
        if !table.contains_key(&key) && table.len() >= capacity {
            table.shift_remove_index(0);
        }
        if table.insert(key, record).is_some() {
            // Re-keyed exchange: the newer record supersedes the stale one.
            tracing::debug!("replaced a stale in-flight exchange record");
        }
    }
}

// Records are plain data, so a panic while a lock is held cannot leave a
// torn record behind; recover instead of propagating the poison.
fn lock<'a>(
    table: &'a Mutex<IndexMap<String, ExchangeRecord>>,
) -> MutexGuard<'a, IndexMap<String, ExchangeRecord>> {
    table.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[path = "correlator_test.rs"]
mod correlator_test;
