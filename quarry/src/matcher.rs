//! Query and filter match predicate.
//!
//! Matching is literal case-insensitive substring over title, description,
//! and tags. No stemming, no synonyms, no fuzzy matching: "AI" matches the
//! tag "AI Trends" but not the word "Artificial".

use crate::models::{FilterSet, Record, WILDCARD};

/// Whether a record satisfies the free-text query and the structured
/// filters. Text, type, category, and confidence must all hold; the
/// tag-inclusion facet is applied separately via [`retain_tagged`].
pub fn matches(record: &Record, query: &str, filters: &FilterSet) -> bool {
    matches_query(record, query)
        && matches_type(record, &filters.document_type)
        && matches_category(record, &filters.category)
        && record.relevance >= filters.min_confidence
}

/// Case-insensitive substring match in title, description, or any tag.
/// An empty query matches everything; the public search entry point
/// rejects blank queries before this predicate runs.
fn matches_query(record: &Record, query: &str) -> bool {
    let needle = query.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Wildcard or case-insensitive equality against the record's type.
fn matches_type(record: &Record, document_type: &str) -> bool {
    document_type == WILDCARD || record.doc_type.to_lowercase() == document_type.to_lowercase()
}

/// Wildcard or exact equality against the record's category.
fn matches_category(record: &Record, category: &str) -> bool {
    category == WILDCARD || record.category == category
}

/// Tag-inclusion post-filter, applied over the already ranked result list.
/// Records occupy their rank positions before narrowing; an empty tag set
/// passes everything. Membership is exact string equality, matching the
/// facet chips that produced the tag set.
pub fn retain_tagged(results: &mut Vec<Record>, include_tags: &[String]) {
    if include_tags.is_empty() {
        return;
    }
    results.retain(|record| include_tags.iter().any(|tag| record.tags.contains(tag)));
}
