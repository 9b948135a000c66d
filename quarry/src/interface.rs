//! Public interface types shared across the engine.

use thiserror::Error;

use crate::models::Record;

/// Error type for Quarry operations.
///
/// None of these terminate the hosting process: `InvalidQuery` and
/// `SavedSearchNotFound` are surfaced to the user and recovered locally,
/// `InvalidRecord` rejects a corpus at the loading boundary. Persistence
/// failures never appear here; the ledger and registry swallow and log
/// them (in-memory state stays authoritative).
#[derive(Debug, Error)]
pub enum QuarryError {
    /// Empty or whitespace-only query passed to `search` or `save`.
    #[error("invalid query: empty or whitespace-only")]
    InvalidQuery,
    /// `load` on the saved-search registry with an unknown id.
    #[error("saved search not found: {0}")]
    SavedSearchNotFound(i64),
    /// A record failed boundary validation when loading the corpus.
    #[error("invalid record {id}: {reason}")]
    InvalidRecord { id: i64, reason: String },
}

/// Outcome of a successful search: ranked, tag-filtered results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Matching records, relevance-descending, after the tag post-filter.
    pub results: Vec<Record>,
    /// `results.len()`, kept explicit for host display ("Found N results").
    pub count: usize,
}
