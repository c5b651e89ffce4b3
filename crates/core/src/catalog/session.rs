//! Ordering guard for overlapping search requests.
//!
//! Search responses can arrive out of order when a second query is
//! issued while the first is still in flight. Instead of letting
//! arrival order decide which result set sticks, each request takes a
//! monotonically increasing ticket from [`SearchSession::begin`] and
//! results are installed only if their ticket is still the most
//! recently issued one. Stale responses are dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use super::types::CatalogMovie;

/// Latest-request-wins holder for search results.
#[derive(Debug, Default)]
pub struct SearchSession {
    seq: AtomicU64,
    state: Mutex<Applied>,
}

#[derive(Debug, Default)]
struct Applied {
    ticket: u64,
    results: Vec<CatalogMovie>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new search request.
    pub fn begin(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Install results for a completed request.
    ///
    /// Returns true if the results were applied, false if a newer
    /// request was issued in the meantime and these were discarded.
    pub fn apply(&self, ticket: u64, results: Vec<CatalogMovie>) -> bool {
        if ticket != self.seq.load(Ordering::SeqCst) {
            return false;
        }
        let mut state = self.state.lock().unwrap();
        state.ticket = ticket;
        state.results = results;
        true
    }

    /// Current result list, in the order the catalog returned it.
    pub fn results(&self) -> Vec<CatalogMovie> {
        self.state.lock().unwrap().results.clone()
    }
}
