//! State for the article detail view.

use crate::model::Article;
use crate::store::Snapshot;

/// Lifecycle of one mounted article detail view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ArticleDetailState {
    /// Nothing mounted yet.
    #[default]
    Idle,

    /// Fetch in flight for the slug.
    Loading { slug: String },

    /// Article fetched; local shadow for immediate feedback.
    Loaded(ArticleView),

    /// Service answered: no article has this slug.
    NotFound { slug: String },

    /// Fetch failed; retryable.
    Failed { slug: String, error: String },
}

impl Snapshot for ArticleDetailState {}

/// Locally shadowed article plus per-toggle sub-states.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleView {
    pub article: Article,
    pub like: ToggleState,
    pub bookmark: ToggleState,
}

impl ArticleView {
    pub fn new(article: Article) -> Self {
        Self {
            article,
            like: ToggleState::Settled,
            bookmark: ToggleState::Settled,
        }
    }
}

/// Confirmation state of one like/bookmark control.
///
/// The shadowed article only ever holds server-confirmed values; a
/// failed toggle keeps the prior confirmed value and carries the error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ToggleState {
    /// No call outstanding; shown value is confirmed.
    #[default]
    Settled,

    /// Call in flight; the control is disabled.
    Pending,

    /// Last call failed; shown value is the prior confirmed one.
    Failed { error: String },
}

impl ToggleState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }
}

impl ArticleDetailState {
    /// The slug this view is showing or trying to show.
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Loading { slug } | Self::NotFound { slug } | Self::Failed { slug, .. } => {
                Some(slug)
            }
            Self::Loaded(view) => Some(&view.article.slug),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// The loaded view, if any.
    pub fn view(&self) -> Option<&ArticleView> {
        match self {
            Self::Loaded(view) => Some(view),
            _ => None,
        }
    }

    /// True when a retry would re-enter `Loading`.
    pub fn can_retry(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Failed { .. })
    }
}
