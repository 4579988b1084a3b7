//! Actions accepted by the application store.

use crate::model::{Article, ArticleId, Notification, UserId};

use super::Action;

/// A tagged state mutation.
///
/// Every variant is handled by the reducer; transitions never fail.
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Replace the article cache wholesale.
    SetArticles(Vec<Article>),
    /// Prepend an article (newest first). Callers ensure id uniqueness.
    AddArticle(Article),
    /// Replace the article with a matching id; no-op if absent.
    UpdateArticle(Article),
    /// Remove the article with a matching id; no-op if absent.
    RemoveArticle(ArticleId),
    /// Mark an article liked by the viewer.
    LikeArticle(ArticleId),
    /// Withdraw the viewer's like.
    UnlikeArticle(ArticleId),
    /// Mark an article bookmarked by the viewer.
    BookmarkArticle(ArticleId),
    /// Withdraw the viewer's bookmark.
    UnbookmarkArticle(ArticleId),
    /// Follow a user.
    FollowUser(UserId),
    /// Unfollow a user.
    UnfollowUser(UserId),
    /// Replace the global busy flag.
    SetLoading(bool),
    /// Append a notification in arrival order.
    PushNotification(Notification),
    /// Drop all notifications.
    ClearNotifications,
}

impl Action for AppAction {}
