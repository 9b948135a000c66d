//! History ledger: bounded, deduplicated, persisted list of past queries.
//!
//! Every mutation synchronously writes the full list to storage, best
//! effort: a failed write is logged and the in-memory ledger stays
//! authoritative for the rest of the session.

use std::sync::Arc;

use crate::storage::KeyValueStorage;

/// Storage key for the persisted query list.
pub const HISTORY_KEY: &str = "searchHistory";

/// Maximum retained entries; recording an 11th evicts the oldest.
pub const HISTORY_CAP: usize = 10;

pub struct SearchHistory {
    storage: Arc<dyn KeyValueStorage>,
    entries: Vec<String>,
}

impl std::fmt::Debug for SearchHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchHistory")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl SearchHistory {
    /// Load the ledger from storage. Missing or unreadable state degrades
    /// to an empty ledger, never an error.
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> Self {
        let entries = match storage.get(HISTORY_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("discarding unreadable search history: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("failed to read search history: {e}");
                Vec::new()
            }
        };
        Self { storage, entries }
    }

    /// Record a query at the front of the ledger. Deduplicates on exact
    /// (case-sensitive) string equality, then truncates to [`HISTORY_CAP`].
    pub fn record(&mut self, query: &str) {
        self.entries.retain(|q| q != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(HISTORY_CAP);
        self.persist();
    }

    /// Most-recent-first view of the current entries.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Delete the entry at the given position in the current view.
    /// Out-of-range positions are a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
            self.persist();
        }
    }

    /// Empty the ledger and drop the persisted key.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.storage.remove(HISTORY_KEY) {
            log::warn!("failed to clear persisted search history: {e}");
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) {
        let raw = match serde_json::to_string(&self.entries) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("failed to serialize search history: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(HISTORY_KEY, &raw) {
            log::warn!("failed to persist search history: {e}");
        }
    }
}
