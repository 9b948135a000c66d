//! Saved-search registry: persisted (query, filter-set) snapshots keyed by
//! query text. Saving an existing query replaces the prior entry with the
//! new filters and timestamp; the list is not length-capped.
//!
//! Persistence follows the same best-effort policy as the history ledger.

use std::sync::Arc;

use crate::interface::QuarryError;
use crate::models::{FilterSet, SavedSearch};
use crate::storage::KeyValueStorage;

/// Storage key for the persisted entry list.
pub const SAVED_SEARCHES_KEY: &str = "savedSearches";

pub struct SavedSearchRegistry {
    storage: Arc<dyn KeyValueStorage>,
    entries: Vec<SavedSearch>,
}

impl SavedSearchRegistry {
    /// Load the registry from storage. Missing or unreadable state degrades
    /// to an empty registry, never an error.
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> Self {
        let entries = match storage.get(SAVED_SEARCHES_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("discarding unreadable saved searches: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("failed to read saved searches: {e}");
                Vec::new()
            }
        };
        Self { storage, entries }
    }

    /// Save a query with a snapshot of its filters. Any existing entry with
    /// the same query text is replaced; the new entry's filters and
    /// timestamp win. Returns the new entry's id.
    pub fn save(&mut self, query: &str, filters: &FilterSet) -> Result<i64, QuarryError> {
        if query.trim().is_empty() {
            return Err(QuarryError::InvalidQuery);
        }

        let entry = SavedSearch::new(query.to_string(), filters.clone());
        let id = entry.id;
        self.entries.retain(|s| s.query != query);
        self.entries.insert(0, entry);
        self.persist();
        Ok(id)
    }

    /// Produce the (query, filters) pair for the given id. Does not mutate
    /// the registry; the caller applies the pair to its own session state.
    pub fn load(&self, id: i64) -> Result<(String, FilterSet), QuarryError> {
        self.entries
            .iter()
            .find(|s| s.id == id)
            .map(|s| (s.query.clone(), s.filters.clone()))
            .ok_or(QuarryError::SavedSearchNotFound(id))
    }

    /// Delete the entry with the given id. An absent id is a no-op, not an
    /// error; the list is re-persisted either way.
    pub fn remove(&mut self, id: i64) {
        self.entries.retain(|s| s.id != id);
        self.persist();
    }

    /// Most-recent-first view of the current entries.
    pub fn all(&self) -> impl Iterator<Item = &SavedSearch> {
        self.entries.iter()
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
                log::warn!("failed to serialize saved searches: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(SAVED_SEARCHES_KEY, &raw) {
            log::warn!("failed to persist saved searches: {e}");
        }
    }
}
