//! Remote article service boundary.
//!
//! The service owns articles; this crate only caches them. The trait is
//! object safe so controllers can hold `Arc<dyn ArticleService>` and tests
//! can substitute a scripted implementation.

mod error;
mod http;

pub use error::ServiceError;
pub use http::HttpArticleService;

use crate::model::{Article, ArticleId, UserId, Viewer};

/// Asynchronous CRUD surface of the remote article service.
#[async_trait::async_trait]
pub trait ArticleService: Send + Sync {
    /// Fetch one article by slug.
    ///
    /// A signed-in viewer receives viewer-relative `is_liked`/
    /// `is_bookmarked` flags. Returns `Ok(None)` when no article has the
    /// slug.
    async fn fetch_by_slug(
        &self,
        slug: &str,
        viewer: &Viewer,
    ) -> Result<Option<Article>, ServiceError>;

    /// Record a like by the viewer.
    async fn like(&self, article: &ArticleId, viewer: &UserId) -> Result<(), ServiceError>;

    /// Withdraw the viewer's like.
    async fn unlike(&self, article: &ArticleId, viewer: &UserId) -> Result<(), ServiceError>;

    /// Record a bookmark by the viewer.
    async fn bookmark(&self, article: &ArticleId, viewer: &UserId) -> Result<(), ServiceError>;

    /// Withdraw the viewer's bookmark.
    async fn unbookmark(&self, article: &ArticleId, viewer: &UserId) -> Result<(), ServiceError>;
}
