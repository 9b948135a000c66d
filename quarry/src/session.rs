//! Search session: orchestrates matching, ranking, and history recording
//! over a corpus snapshot.
//!
//! A session is synchronous and runs one search at a time to completion.
//! The active filter set and query text live here as explicit state so
//! quick searches (tag chips, history entries) reuse them.

use std::sync::Arc;

use validator::Validate;

use crate::history::SearchHistory;
use crate::interface::{QuarryError, SearchOutcome};
use crate::matcher;
use crate::models::{FilterSet, Record};
use crate::ranking;
use crate::storage::KeyValueStorage;

#[derive(Debug)]
pub struct SearchSession {
    corpus: Vec<Record>,
    history: SearchHistory,
    filters: FilterSet,
    query: String,
}

impl SearchSession {
    /// Create a session over a corpus snapshot, loading persisted history
    /// from the given storage. Every record is validated at the boundary;
    /// an out-of-range score rejects the whole load.
    pub fn new(
        corpus: Vec<Record>,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Result<Self, QuarryError> {
        for record in &corpus {
            record.validate().map_err(|e| QuarryError::InvalidRecord {
                id: record.id,
                reason: e.to_string(),
            })?;
        }

        Ok(Self {
            corpus,
            history: SearchHistory::open(storage),
            filters: FilterSet::default(),
            query: String::new(),
        })
    }

    /// Run a search with explicit filters.
    ///
    /// A blank query fails with `InvalidQuery` and has no side effects.
    /// Any other query is recorded in history, even with zero results:
    /// match, rank, then narrow by the tag facet over the ranked list.
    pub fn search(
        &mut self,
        query: &str,
        filters: &FilterSet,
    ) -> Result<SearchOutcome, QuarryError> {
        if query.trim().is_empty() {
            return Err(QuarryError::InvalidQuery);
        }
        self.query = query.to_string();

        let candidates: Vec<Record> = self
            .corpus
            .iter()
            .filter(|record| matcher::matches(record, query, filters))
            .cloned()
            .collect();

        let mut results = ranking::rank(candidates);
        matcher::retain_tagged(&mut results, &filters.include_tags);

        self.history.record(query);

        let count = results.len();
        Ok(SearchOutcome { results, count })
    }

    /// Search triggered from a tag chip, popular-search chip, or history
    /// entry: adopts the query as the session's current text and runs with
    /// the currently-active filters.
    pub fn quick_search(&mut self, query: &str) -> Result<SearchOutcome, QuarryError> {
        let filters = self.filters.clone();
        self.search(query, &filters)
    }

    /// Apply a loaded saved search (query + filters) to the session state
    /// without running it.
    pub fn apply(&mut self, query: &str, filters: FilterSet) {
        self.query = query.to_string();
        self.filters = filters;
    }

    /// Reset the active filters to defaults.
    pub fn clear_filters(&mut self) {
        self.filters = FilterSet::default();
    }

    pub fn set_filters(&mut self, filters: FilterSet) {
        self.filters = filters;
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn corpus(&self) -> &[Record] {
        &self.corpus
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Mutable ledger access for host-driven edits (per-entry delete,
    /// clear history).
    pub fn history_mut(&mut self) -> &mut SearchHistory {
        &mut self.history
    }
}
