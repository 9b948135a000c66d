//! Relevance ranking.
//!
//! Results order by the precomputed relevance score, descending. The sort
//! is stable: equal-relevance records keep their corpus-relative order,
//! so repeated searches over the same corpus are deterministic.

use crate::models::Record;

/// Order records by relevance, highest first.
pub fn rank(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    records
}
