//! Demo knowledge-record corpus for tests and demo sessions.
//!
//! Mirrors the mock data the dashboard ships with: four records spanning
//! the document types and categories, plus the popular-search chips.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use quarry::models::Record;

static CORPUS: Lazy<Vec<Record>> = Lazy::new(|| {
    vec![
        Record {
            id: 1,
            title: "AI Knowledge Transfer Guide".to_string(),
            description: "Comprehensive guide on implementing AI-powered knowledge transfer systems in organizations.".to_string(),
            doc_type: "Document".to_string(),
            category: "Technical Docs".to_string(),
            tags: tags(&["AI", "Knowledge Transfer", "Technical", "Guide"]),
            relevance: 95,
            rating: 4.8,
            author: "Dr. Sarah Chen".to_string(),
            last_modified: date(2024, 1, 15),
            size: "2.4 MB".to_string(),
            views: 1247,
            downloads: 89,
        },
        Record {
            id: 2,
            title: "Machine Learning Fundamentals".to_string(),
            description: "Core concepts and principles of machine learning algorithms and their applications.".to_string(),
            doc_type: "Article".to_string(),
            category: "Research Papers".to_string(),
            tags: tags(&["Machine Learning", "AI", "Research", "Fundamentals"]),
            relevance: 87,
            rating: 4.6,
            author: "Prof. Michael Rodriguez".to_string(),
            last_modified: date(2024, 1, 14),
            size: "1.8 MB".to_string(),
            views: 892,
            downloads: 156,
        },
        Record {
            id: 3,
            title: "Data Science Best Practices".to_string(),
            description: "Industry best practices for data science projects and workflow optimization.".to_string(),
            doc_type: "Report".to_string(),
            category: "Process Docs".to_string(),
            tags: tags(&["Data Science", "Best Practices", "Process", "Workflow"]),
            relevance: 82,
            rating: 4.4,
            author: "Data Science Team".to_string(),
            last_modified: date(2024, 1, 13),
            size: "3.2 MB".to_string(),
            views: 567,
            downloads: 234,
        },
        Record {
            id: 4,
            title: "Artificial Intelligence Trends 2024".to_string(),
            description: "Analysis of emerging trends and developments in artificial intelligence for 2024.".to_string(),
            doc_type: "Research".to_string(),
            category: "Research Papers".to_string(),
            tags: tags(&["AI Trends", "Research", "2024", "Emerging Tech"]),
            relevance: 78,
            rating: 4.7,
            author: "AI Research Institute".to_string(),
            last_modified: date(2024, 1, 12),
            size: "4.1 MB".to_string(),
            views: 445,
            downloads: 178,
        },
    ]
});

const POPULAR_SEARCHES: [&str; 8] = [
    "AI Assistant",
    "Knowledge Base",
    "Document Processing",
    "Team Collaboration",
    "Analytics Dashboard",
    "Project Management",
    "Machine Learning",
    "Data Analysis",
];

/// The four-record demo corpus.
pub fn demo_corpus() -> Vec<Record> {
    CORPUS.clone()
}

/// Suggested query strings hosts surface as quick-search chips.
pub fn popular_searches() -> &'static [&'static str] {
    &POPULAR_SEARCHES
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}
