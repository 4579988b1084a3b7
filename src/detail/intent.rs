//! Intents for the article detail view.

use crate::model::Article;
use crate::store::Action;

/// User actions and service outcomes driving the detail state machine.
#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// Mount (or remount) the view for a slug.
    Load { slug: String },
    /// Fetch resolved with an article.
    Fetched { article: Article },
    /// Fetch resolved with no article for the slug.
    Missing,
    /// Fetch failed.
    FetchFailed { error: String },
    /// Like/unlike call dispatched.
    LikePending,
    /// Like/unlike call confirmed by the service.
    LikeConfirmed { liked: bool },
    /// Like/unlike call failed; confirmed value stands.
    LikeFailed { error: String },
    /// Bookmark/unbookmark call dispatched.
    BookmarkPending,
    /// Bookmark/unbookmark call confirmed by the service.
    BookmarkConfirmed { bookmarked: bool },
    /// Bookmark/unbookmark call failed; confirmed value stands.
    BookmarkFailed { error: String },
    /// Unmount the view.
    Reset,
}

impl Action for DetailIntent {}
