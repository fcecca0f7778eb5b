//! Content items served by the portal.
//!
//! Items are immutable once loaded into a corpus. The portal pages render
//! them; this crate only filters, searches, and projects them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content identifier (SHA256(url)[0:16])
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(String);

impl ContentId {
    /// Create a content ID from a URL
    pub fn from_url(url: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        let result = hasher.finalize();

        // Take first 8 bytes (16 hex chars)
        let hash: String = result[..8].iter().map(|b| format!("{:02x}", b)).collect();
        Self(hash)
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single piece of portal content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique content identifier
    pub id: ContentId,

    /// Human-readable title
    pub title: String,

    /// Full body text (searched and excerpted)
    pub body: String,

    /// Category slug used by the filter bar (e.g. "scrum", "ai")
    pub category: String,

    /// Link target for the rendered result
    pub url: String,

    /// Tags shown on the card; also searched
    #[serde(default)]
    pub tags: Vec<String>,

    /// Publication timestamp, used for recency-ordered listings
    pub published_at: DateTime<Utc>,
}

impl ContentItem {
    /// Create a new content item with an ID derived from the URL
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let url = url.into();
        Self {
            id: ContentId::from_url(&url),
            title: title.into(),
            body: body.into(),
            category: category.into(),
            url,
            tags: Vec::new(),
            published_at: Utc::now(),
        }
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set the publication timestamp
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = published_at;
        self
    }
}
