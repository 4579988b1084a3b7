//! Article model as served by the remote article service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique article identifier, opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique user identifier, opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Topic tag attached to an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    /// Hex color for badge rendering (e.g. "#AC834F").
    #[serde(default)]
    pub color: Option<String>,
}

/// Author details as embedded in an article response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorProfile {
    pub id: UserId,
    pub full_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub followers_count: u64,
}

/// One block of article body content.
///
/// The body is an ordered sequence of blocks; the renderer walks them
/// in order. Unknown block types are a service-side contract violation
/// and fail deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Paragraph {
        text: String,
    },
    Heading {
        level: u8,
        text: String,
    },
    Image {
        url: String,
        #[serde(default)]
        caption: Option<String>,
    },
    Code {
        #[serde(default)]
        language: Option<String>,
        source: String,
    },
    Quote {
        text: String,
        #[serde(default)]
        attribution: Option<String>,
    },
}

/// An article as fetched from the remote service, cached locally.
///
/// `is_liked` and `is_bookmarked` are viewer-relative projections of the
/// interaction sets, not independently authoritative. The reducer keeps
/// them paired with set membership within each transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    pub author: AuthorProfile,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub views_count: u64,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub reading_time_minutes: u32,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_bookmarked: bool,
}
