//! The content corpus: loading, filtering, and searching.
//!
//! A corpus is a JSON index of every item the portal can show. Filtering
//! and searching are pure functions over it; nothing here mutates the
//! items or keeps state between queries.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::domain::{ContentId, ContentItem};

use super::highlight::highlight;

/// Category sentinel meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Default excerpt budget in chars, matching the portal's result cards
pub const DEFAULT_EXCERPT_CHARS: usize = 150;

/// Corpus of all portal content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    /// Corpus format version
    pub version: u32,

    /// All content items, in publication order as authored
    pub items: Vec<ContentItem>,
}

impl Default for Corpus {
    fn default() -> Self {
        Self::new()
    }
}

impl Corpus {
    /// Create a new empty corpus
    pub fn new() -> Self {
        Self {
            version: 1,
            items: Vec::new(),
        }
    }

    /// Load a corpus from a JSON file.
    ///
    /// A missing required field in any item is a hard error; a corpus the
    /// engine cannot trust must not silently degrade into partial results.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read corpus: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse corpus: {}", path.display()))
    }

    /// Save the corpus to a JSON file
    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write corpus: {}", path.display()))?;

        Ok(())
    }

    /// Add an item, replacing any existing item with the same ID
    pub fn add(&mut self, item: ContentItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            *existing = item;
        } else {
            self.items.push(item);
        }
    }

    /// Get an item by ID
    pub fn get(&self, id: &ContentId) -> Option<&ContentItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Filter items by category slug.
    ///
    /// The sentinel [`ALL_CATEGORIES`] returns every item. Otherwise the
    /// match is a case-sensitive exact comparison. Input order is preserved.
    pub fn filter_by_category(&self, category: &str) -> Vec<&ContentItem> {
        self.items
            .iter()
            .filter(|item| category == ALL_CATEGORIES || item.category == category)
            .collect()
    }

    /// Search items by query (case-insensitive substring match against
    /// title, body, and tags), producing highlighted projections.
    ///
    /// Results come back in corpus order; there is no relevance scoring.
    /// The query is trimmed and case-folded before matching. Minimum-length
    /// enforcement is the caller's job; an empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<SearchResult<'_>> {
        self.search_with(query, DEFAULT_EXCERPT_CHARS)
    }

    /// Search with an explicit excerpt budget
    pub fn search_with(&self, query: &str, excerpt_chars: usize) -> Vec<SearchResult<'_>> {
        let trimmed = query.trim();
        let needle = trimmed.to_lowercase();

        self.items
            .iter()
            .filter(|item| {
                item.title.to_lowercase().contains(&needle)
                    || item.body.to_lowercase().contains(&needle)
                    || item.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .map(|item| SearchResult {
                highlighted_title: highlight(&item.title, trimmed),
                highlighted_excerpt: highlight(&excerpt(&item.body, excerpt_chars), trimmed),
                item,
            })
            .collect()
    }

    /// Get all items sorted by published_at (most recent first)
    pub fn list(&self, limit: Option<usize>) -> Vec<&ContentItem> {
        let mut items: Vec<_> = self.items.iter().collect();
        items.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        if let Some(limit) = limit {
            items.truncate(limit);
        }

        items
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the corpus is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Take up to `max_chars` chars of `body`, appending `...` when truncated
fn excerpt(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// A single search match, borrowed from the corpus
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    /// The matched item
    pub item: &'a ContentItem,

    /// Title with every query occurrence wrapped in emphasis markers
    pub highlighted_title: String,

    /// Body excerpt with query occurrences wrapped in emphasis markers
    pub highlighted_excerpt: String,
}

impl SearchResult<'_> {
    /// Owned projection for delivery across task boundaries
    pub fn to_hit(&self) -> SearchHit {
        SearchHit {
            id: self.item.id.clone(),
            url: self.item.url.clone(),
            category: self.item.category.clone(),
            highlighted_title: self.highlighted_title.clone(),
            highlighted_excerpt: self.highlighted_excerpt.clone(),
        }
    }
}

/// Owned search match, detached from the corpus lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: ContentId,
    pub url: String,
    pub category: String,
    pub highlighted_title: String,
    pub highlighted_excerpt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_corpus() -> Corpus {
        let mut corpus = Corpus::new();

        corpus.add(
            ContentItem::new(
                "blog/o-que-e-scrum.html",
                "What is Scrum?",
                "Understand the fundamentals of the world's most popular agile methodology",
                "scrum",
            )
            .with_tags(["agile", "scrum"]),
        );

        corpus.add(
            ContentItem::new(
                "pages/tasktracker.html",
                "TaskTracker",
                "Complete tool for Scrum project management",
                "tools",
            )
            .with_tag("productivity"),
        );

        corpus.add(ContentItem::new(
            "blog/big-data.html",
            "Big Data events",
            "Upcoming conferences on data engineering",
            "data",
        ));

        corpus
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let corpus = sample_corpus();
        let all = corpus.filter_by_category(ALL_CATEGORIES);

        assert_eq!(all.len(), corpus.len());
        for (filtered, original) in all.iter().zip(corpus.items.iter()) {
            assert_eq!(filtered.id, original.id);
        }
    }

    #[test]
    fn test_filter_by_category_partitions() {
        let corpus = sample_corpus();

        let scrum = corpus.filter_by_category("scrum");
        assert_eq!(scrum.len(), 1);
        assert!(scrum.iter().all(|i| i.category == "scrum"));

        let excluded: Vec<_> = corpus
            .items
            .iter()
            .filter(|i| !scrum.iter().any(|s| s.id == i.id))
            .collect();
        assert!(excluded.iter().all(|i| i.category != "scrum"));
    }

    #[test]
    fn test_filter_category_match_is_case_sensitive() {
        let corpus = sample_corpus();
        assert!(corpus.filter_by_category("Scrum").is_empty());
    }

    #[test]
    fn test_search_matches_title_body_and_tags() {
        let corpus = sample_corpus();

        // "scrum" appears in the first item's title and the second's body
        let results = corpus.search("scrum");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].item.title, "What is Scrum?");
        assert_eq!(results[1].item.title, "TaskTracker");

        // tag-only match
        let results = corpus.search("productivity");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item.title, "TaskTracker");
    }

    #[test]
    fn test_search_is_case_insensitive_and_trims() {
        let corpus = sample_corpus();

        let results = corpus.search("  SCRUM  ");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_search_matches_title_case_insensitively() {
        let mut corpus = Corpus::new();
        corpus.add(ContentItem::new("a", "What is Scrum?", "", "scrum"));
        corpus.add(ContentItem::new("b", "TaskTracker", "", "tools"));

        let results = corpus.search("scrum");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item.title, "What is Scrum?");
    }

    #[test]
    fn test_search_highlights_matches() {
        let corpus = sample_corpus();
        let results = corpus.search("scrum");

        assert_eq!(results[0].highlighted_title, "What is <mark>Scrum</mark>?");
        assert!(results[1].highlighted_excerpt.contains("<mark>Scrum</mark>"));
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let corpus = sample_corpus();
        assert!(corpus.search("python").is_empty());
    }

    #[test]
    fn test_excerpt_truncation() {
        assert_eq!(excerpt("short body", 150), "short body");

        let long = "x".repeat(200);
        let cut = excerpt(&long, 150);
        assert_eq!(cut.chars().count(), 153);
        assert!(cut.ends_with("..."));

        // Truncation must respect char boundaries
        let accented = "é".repeat(200);
        let cut = excerpt(&accented, 150);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_list_orders_by_recency() {
        use chrono::{Duration, Utc};

        let mut corpus = Corpus::new();
        let now = Utc::now();

        corpus.add(ContentItem::new("old", "Old", "", "x").with_published_at(now - Duration::days(2)));
        corpus.add(ContentItem::new("new", "New", "", "x").with_published_at(now));
        corpus.add(ContentItem::new("mid", "Mid", "", "x").with_published_at(now - Duration::days(1)));

        let listed = corpus.list(Some(2));
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].title, "New");
        assert_eq!(listed[1].title, "Mid");
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_corpus() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("corpus.json");

        // items[0] is missing its body
        tokio::fs::write(
            &path,
            r#"{"version": 1, "items": [{"id": "00", "title": "t", "category": "c", "url": "u", "published_at": "2024-01-01T00:00:00Z"}]}"#,
        )
        .await
        .unwrap();

        let result = Corpus::load(&path).await;
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Failed to parse corpus"));
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested").join("corpus.json");

        let corpus = sample_corpus();
        corpus.save(&path).await.unwrap();

        let loaded = Corpus::load(&path).await.unwrap();
        assert_eq!(loaded.len(), corpus.len());
        assert_eq!(loaded.items[0].title, corpus.items[0].title);
    }
}
