//! Shared test fixtures and the scripted article service.

#![allow(dead_code, unused_imports)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use inkstream::model::{Article, ArticleId, AuthorProfile, UserId, Viewer};
use inkstream::service::{ArticleService, ServiceError};

/// Build an article fixture with the interaction fields under test.
pub fn make_article(id: &str, slug: &str, likes: u64, liked: bool) -> Article {
    Article {
        id: ArticleId::new(id),
        slug: slug.to_string(),
        title: format!("Article {id}"),
        excerpt: Some("An excerpt".to_string()),
        content: Vec::new(),
        author: AuthorProfile {
            id: UserId::new("author-1"),
            full_name: "Ada Lovelace".to_string(),
            avatar_url: None,
            is_verified: true,
            followers_count: 42,
        },
        tags: Vec::new(),
        published_at: None,
        views_count: 7,
        likes_count: likes,
        reading_time_minutes: 4,
        is_liked: liked,
        is_bookmarked: false,
    }
}

/// Scripted in-memory article service.
///
/// Serves articles by slug, records every call, and can be told to fail
/// the next fetch or all interaction calls.
#[derive(Default)]
pub struct MockArticleService {
    articles: Mutex<HashMap<String, Article>>,
    fail_next_fetch: AtomicBool,
    fail_interactions: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl MockArticleService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_article(self, article: Article) -> Self {
        self.articles.lock().insert(article.slug.clone(), article);
        self
    }

    pub fn fail_next_fetch(&self) {
        self.fail_next_fetch.store(true, Ordering::SeqCst);
    }

    pub fn fail_interactions(&self, fail: bool) {
        self.fail_interactions.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().push(call);
    }

    fn scripted_failure() -> ServiceError {
        ServiceError::Upstream {
            status: 500,
            message: "scripted failure".to_string(),
        }
    }

    fn interaction(
        &self,
        verb: &str,
        article: &ArticleId,
        viewer: &UserId,
    ) -> Result<(), ServiceError> {
        self.record(format!("{verb}:{article}:{viewer}"));
        if self.fail_interactions.load(Ordering::SeqCst) {
            return Err(Self::scripted_failure());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ArticleService for MockArticleService {
    async fn fetch_by_slug(
        &self,
        slug: &str,
        viewer: &Viewer,
    ) -> Result<Option<Article>, ServiceError> {
        let viewer_tag = viewer
            .user_id()
            .map(|id| id.as_str().to_string())
            .unwrap_or_else(|| "anonymous".to_string());
        self.record(format!("fetch:{slug}:{viewer_tag}"));
        if self.fail_next_fetch.swap(false, Ordering::SeqCst) {
            return Err(Self::scripted_failure());
        }
        Ok(self.articles.lock().get(slug).cloned())
    }

    async fn like(&self, article: &ArticleId, viewer: &UserId) -> Result<(), ServiceError> {
        self.interaction("like", article, viewer)
    }

    async fn unlike(&self, article: &ArticleId, viewer: &UserId) -> Result<(), ServiceError> {
        self.interaction("unlike", article, viewer)
    }

    async fn bookmark(&self, article: &ArticleId, viewer: &UserId) -> Result<(), ServiceError> {
        self.interaction("bookmark", article, viewer)
    }

    async fn unbookmark(&self, article: &ArticleId, viewer: &UserId) -> Result<(), ServiceError> {
        self.interaction("unbookmark", article, viewer)
    }
}
