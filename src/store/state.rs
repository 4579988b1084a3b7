//! Root application state snapshot.

use std::collections::HashSet;

use crate::model::{Article, ArticleId, Notification, UserId};

use super::Snapshot;

/// The entire application state at one point in time.
///
/// Created once with empty collections, then replaced wholesale on every
/// dispatched action. Interaction sets are true sets: membership is
/// idempotent, and the `is_liked`/`is_bookmarked` flags on cached articles
/// are projections of membership, kept paired by the reducer within each
/// transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Cached articles, unique by id, newest first.
    pub articles: Vec<Article>,
    /// Users the viewer follows.
    pub followed_users: HashSet<UserId>,
    /// Articles the viewer has liked.
    pub liked_articles: HashSet<ArticleId>,
    /// Articles the viewer has bookmarked.
    pub bookmarked_articles: HashSet<ArticleId>,
    /// Opaque notification records in arrival order.
    pub notifications: Vec<Notification>,
    /// Global busy flag.
    pub loading: bool,
}

impl Snapshot for AppState {}

impl AppState {
    /// Look up a cached article by id.
    pub fn article(&self, id: &ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| &a.id == id)
    }
}
