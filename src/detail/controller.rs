//! Controller driving the article detail view.

use std::sync::Arc;

use crate::config::ShareConfig;
use crate::model::Viewer;
use crate::service::ArticleService;
use crate::share::ShareLinks;
use crate::store::{AppAction, Reducer, Store};

use super::intent::DetailIntent;
use super::reducer::DetailReducer;
use super::state::ArticleDetailState;

/// Owns the detail view state and the effects around it.
///
/// Every service outcome is fed back through the reducer, and confirmed
/// like/bookmark mutations are mirrored into the shared store so other
/// views re-render from the same data.
pub struct ArticleDetailController {
    service: Arc<dyn ArticleService>,
    store: Store,
    viewer: Viewer,
    state: ArticleDetailState,
}

impl ArticleDetailController {
    pub fn new(service: Arc<dyn ArticleService>, store: Store, viewer: Viewer) -> Self {
        Self {
            service,
            store,
            viewer,
            state: ArticleDetailState::default(),
        }
    }

    /// Current view state.
    pub fn state(&self) -> &ArticleDetailState {
        &self.state
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    fn apply(&mut self, intent: DetailIntent) {
        self.state = DetailReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Mount the view for a slug and fetch the article.
    pub async fn load(&mut self, slug: &str) {
        self.apply(DetailIntent::Load {
            slug: slug.to_string(),
        });

        match self.service.fetch_by_slug(slug, &self.viewer).await {
            Ok(Some(article)) => {
                // Other views read the same article from the store.
                self.store
                    .dispatch(AppAction::UpdateArticle(article.clone()));
                self.apply(DetailIntent::Fetched { article });
            }
            Ok(None) => {
                tracing::info!(slug, "Article not found");
                self.apply(DetailIntent::Missing);
            }
            Err(err) => {
                tracing::error!(slug, kind = err.kind(), error = %err, "Failed to fetch article");
                self.apply(DetailIntent::FetchFailed {
                    error: err.to_string(),
                });
            }
        }
    }

    /// Re-fetch after `NotFound` or `Failed`.
    pub async fn retry(&mut self) {
        if !self.state.can_retry() {
            return;
        }
        let Some(slug) = self.state.slug().map(str::to_string) else {
            return;
        };
        self.load(&slug).await;
    }

    /// Replace the viewer identity.
    ///
    /// Viewer-relative flags come from the service, so a mounted view is
    /// refetched under the new identity.
    pub async fn set_viewer(&mut self, viewer: Viewer) {
        if self.viewer == viewer {
            return;
        }
        self.viewer = viewer;
        if let Some(slug) = self.state.slug().map(str::to_string) {
            self.load(&slug).await;
        }
    }

    /// Unmount the view.
    pub fn reset(&mut self) {
        self.apply(DetailIntent::Reset);
    }

    /// Flip the viewer's like on the loaded article.
    ///
    /// Disabled for anonymous viewers and while a like call is already in
    /// flight. Local and shared state change only after the service
    /// confirms; a failure keeps the confirmed value and marks the toggle
    /// failed.
    pub async fn toggle_like(&mut self) {
        let Some(user) = self.viewer.user_id().cloned() else {
            return;
        };
        let Some(view) = self.state.view() else {
            return;
        };
        if view.like.is_pending() {
            return;
        }

        let article_id = view.article.id.clone();
        let currently_liked = view.article.is_liked;
        self.apply(DetailIntent::LikePending);

        let result = if currently_liked {
            self.service.unlike(&article_id, &user).await
        } else {
            self.service.like(&article_id, &user).await
        };

        match result {
            Ok(()) => {
                self.apply(DetailIntent::LikeConfirmed {
                    liked: !currently_liked,
                });
                self.store.dispatch(if currently_liked {
                    AppAction::UnlikeArticle(article_id)
                } else {
                    AppAction::LikeArticle(article_id)
                });
            }
            Err(err) => {
                tracing::error!(
                    article_id = %article_id,
                    kind = err.kind(),
                    error = %err,
                    "Error toggling like"
                );
                self.apply(DetailIntent::LikeFailed {
                    error: err.to_string(),
                });
            }
        }
    }

    /// Flip the viewer's bookmark on the loaded article.
    ///
    /// Symmetric to [`Self::toggle_like`].
    pub async fn toggle_bookmark(&mut self) {
        let Some(user) = self.viewer.user_id().cloned() else {
            return;
        };
        let Some(view) = self.state.view() else {
            return;
        };
        if view.bookmark.is_pending() {
            return;
        }

        let article_id = view.article.id.clone();
        let currently_bookmarked = view.article.is_bookmarked;
        self.apply(DetailIntent::BookmarkPending);

        let result = if currently_bookmarked {
            self.service.unbookmark(&article_id, &user).await
        } else {
            self.service.bookmark(&article_id, &user).await
        };

        match result {
            Ok(()) => {
                self.apply(DetailIntent::BookmarkConfirmed {
                    bookmarked: !currently_bookmarked,
                });
                self.store.dispatch(if currently_bookmarked {
                    AppAction::UnbookmarkArticle(article_id)
                } else {
                    AppAction::BookmarkArticle(article_id)
                });
            }
            Err(err) => {
                tracing::error!(
                    article_id = %article_id,
                    kind = err.kind(),
                    error = %err,
                    "Error toggling bookmark"
                );
                self.apply(DetailIntent::BookmarkFailed {
                    error: err.to_string(),
                });
            }
        }
    }

    /// Share targets for the loaded article. Pure; no state change.
    pub fn share_links(&self, share: &ShareConfig) -> Option<ShareLinks> {
        let view = self.state.view()?;
        match ShareLinks::build(&share.origin, &view.article.slug, &view.article.title) {
            Ok(links) => Some(links),
            Err(err) => {
                tracing::warn!(error = %err, "Could not build share links");
                None
            }
        }
    }
}
