//! Core data models for Quarry
//!
//! Records enter the engine through an external loader (static fixture or
//! remote fetch); the engine never mutates them. Serde attributes match the
//! camelCase shape the host's corpus and persisted state use, with defaults
//! for optional metadata so partially-populated records load cleanly.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Wildcard value for the type/category filters ("match anything").
pub const WILDCARD: &str = "all";

/// One searchable item in the corpus. Immutable once loaded into a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Precomputed relevance score used for ranking; supplied with the
    /// corpus, never computed here.
    #[validate(range(min = 0, max = 100))]
    pub relevance: u8,
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub last_modified: Option<NaiveDate>,
    /// Human-readable size ("2.4 MB"); display-only.
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub downloads: u64,
}

/// Structured constraints narrowing which records may match a query.
///
/// `document_type` and `category` use [`WILDCARD`] to mean "any".
/// `include_tags` empty means no tag restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSet {
    pub document_type: String,
    pub category: String,
    pub min_confidence: u8,
    pub include_tags: Vec<String>,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            document_type: WILDCARD.to_string(),
            category: WILDCARD.to_string(),
            min_confidence: 0,
            include_tags: Vec::new(),
        }
    }
}

/// A persisted (query, filter-set) snapshot, keyed by query text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    /// Creation timestamp in milliseconds, doubling as the entry id.
    pub id: i64,
    pub query: String,
    pub filters: FilterSet,
    pub created_at: DateTime<Utc>,
}

impl SavedSearch {
    pub fn new(query: String, filters: FilterSet) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis(),
            query,
            filters,
            created_at: now,
        }
    }
}
