//! End-to-end scenarios over the demo corpus: ranking order, history
//! recording, saved-search replacement, and persistence across sessions.

use std::sync::Arc;

use quarry::models::FilterSet;
use quarry::saved::SavedSearchRegistry;
use quarry::storage::{MemoryStorage, SqliteStorage};
use quarry::{QuarryError, SearchSession};

fn demo_session() -> SearchSession {
    SearchSession::new(demo_data::demo_corpus(), Arc::new(MemoryStorage::new())).unwrap()
}

#[test]
fn test_search_ai_matches_literal_substrings_ranked() {
    let mut session = demo_session();
    let outcome = session.search("AI", &FilterSet::default()).unwrap();

    // Record 1 via title, record 2 via tag "AI", record 4 via tag "AI Trends".
    // Record 3 has no "ai" substring anywhere. No stemming, no synonyms.
    let ids: Vec<i64> = outcome.results.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 4]);
    assert_eq!(outcome.count, 3);
}

#[test]
fn test_results_relevance_is_non_increasing() {
    let mut session = demo_session();
    for query in ["AI", "research", "data", "guide", "e"] {
        let outcome = session.search(query, &FilterSet::default()).unwrap();
        let scores: Vec<u8> = outcome.results.iter().map(|r| r.relevance).collect();
        let mut sorted = scores.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted, "ranking violated for query {query:?}");
    }
}

#[test]
fn test_search_records_query_as_most_recent_history_entry() {
    let mut session = demo_session();
    session.search("machine learning", &FilterSet::default()).unwrap();
    session.search("AI", &FilterSet::default()).unwrap();
    assert_eq!(session.history().all().next(), Some("AI"));
}

#[test]
fn test_min_confidence_90_keeps_only_top_record() {
    let mut session = demo_session();
    let filters = FilterSet {
        min_confidence: 90,
        ..FilterSet::default()
    };
    // "i" appears in every title; only record 1 clears the threshold
    let outcome = session.search("i", &filters).unwrap();
    let ids: Vec<i64> = outcome.results.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_type_and_category_filters() {
    let mut session = demo_session();

    let by_type = FilterSet {
        document_type: "research".to_string(),
        ..FilterSet::default()
    };
    let outcome = session.search("e", &by_type).unwrap();
    let ids: Vec<i64> = outcome.results.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![4]);

    let by_category = FilterSet {
        category: "Research Papers".to_string(),
        ..FilterSet::default()
    };
    let outcome = session.search("e", &by_category).unwrap();
    let ids: Vec<i64> = outcome.results.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 4]);
}

#[test]
fn test_tag_facet_narrows_ranked_results() {
    let mut session = demo_session();
    let filters = FilterSet {
        include_tags: vec!["Research".to_string()],
        ..FilterSet::default()
    };
    let outcome = session.search("e", &filters).unwrap();
    let ids: Vec<i64> = outcome.results.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 4]);
}

#[test]
fn test_blank_query_leaves_history_untouched() {
    let mut session = demo_session();
    session.search("AI", &FilterSet::default()).unwrap();
    let before: Vec<String> = session.history().all().map(str::to_string).collect();

    assert!(matches!(
        session.search("   ", &FilterSet::default()),
        Err(QuarryError::InvalidQuery)
    ));

    let after: Vec<String> = session.history().all().map(str::to_string).collect();
    assert_eq!(before, after);
}

#[test]
fn test_quick_search_from_popular_chip() {
    let mut session = demo_session();
    let chip = demo_data::popular_searches()
        .iter()
        .find(|q| **q == "Machine Learning")
        .unwrap();
    let outcome = session.quick_search(chip).unwrap();
    assert_eq!(outcome.results[0].id, 2);
    assert_eq!(session.query(), "Machine Learning");
}

#[test]
fn test_saved_search_applies_to_session() {
    let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::new());
    let mut registry = SavedSearchRegistry::open(storage.clone());
    let mut session = SearchSession::new(demo_data::demo_corpus(), storage).unwrap();

    let filters = FilterSet {
        category: "Research Papers".to_string(),
        ..FilterSet::default()
    };
    let id = registry.save("ai", &filters).unwrap();

    let (query, loaded) = registry.load(id).unwrap();
    session.apply(&query, loaded);

    let query = session.query().to_string();
    let active = session.filters().clone();
    let outcome = session.search(&query, &active).unwrap();
    let ids: Vec<i64> = outcome.results.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 4]);
}

#[test]
fn test_history_and_saved_searches_survive_sqlite_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quarry.sqlite");

    {
        let storage = Arc::new(SqliteStorage::open(&path).unwrap());
        let mut session =
            SearchSession::new(demo_data::demo_corpus(), storage.clone()).unwrap();
        session.search("AI", &FilterSet::default()).unwrap();

        let mut registry = SavedSearchRegistry::open(storage);
        registry.save("ai", &FilterSet::default()).unwrap();
    }

    let storage = Arc::new(SqliteStorage::open(&path).unwrap());
    let session = SearchSession::new(demo_data::demo_corpus(), storage.clone()).unwrap();
    assert_eq!(session.history().all().next(), Some("AI"));

    let registry = SavedSearchRegistry::open(storage);
    let queries: Vec<&str> = registry.all().map(|s| s.query.as_str()).collect();
    assert_eq!(queries, vec!["ai"]);
}
