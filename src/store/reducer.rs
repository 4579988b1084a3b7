//! Reducer for application state transitions.

use crate::model::{Article, ArticleId};

use super::action::AppAction;
use super::state::AppState;
use super::Reducer;

/// Reducer for the root application state.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            AppAction::SetArticles(articles) => {
                state.articles = articles;
            }

            AppAction::AddArticle(article) => {
                state.articles.insert(0, article);
            }

            AppAction::UpdateArticle(article) => {
                if let Some(slot) = state.articles.iter_mut().find(|a| a.id == article.id) {
                    *slot = article;
                }
            }

            AppAction::RemoveArticle(id) => {
                state.articles.retain(|a| a.id != id);
            }

            AppAction::LikeArticle(id) => {
                let inserted = state.liked_articles.insert(id.clone());
                with_article(&mut state, &id, |article| {
                    // Count moves only on an actual membership change;
                    // re-liking an already-liked id never double-counts.
                    article.likes_count += u64::from(inserted);
                    article.is_liked = true;
                });
            }

            AppAction::UnlikeArticle(id) => {
                let removed = state.liked_articles.remove(&id);
                with_article(&mut state, &id, |article| {
                    article.likes_count = article.likes_count.saturating_sub(u64::from(removed));
                    article.is_liked = false;
                });
            }

            AppAction::BookmarkArticle(id) => {
                state.bookmarked_articles.insert(id.clone());
                with_article(&mut state, &id, |article| {
                    article.is_bookmarked = true;
                });
            }

            AppAction::UnbookmarkArticle(id) => {
                state.bookmarked_articles.remove(&id);
                with_article(&mut state, &id, |article| {
                    article.is_bookmarked = false;
                });
            }

            AppAction::FollowUser(id) => {
                state.followed_users.insert(id);
            }

            AppAction::UnfollowUser(id) => {
                state.followed_users.remove(&id);
            }

            AppAction::SetLoading(loading) => {
                state.loading = loading;
            }

            AppAction::PushNotification(notification) => {
                state.notifications.push(notification);
            }

            AppAction::ClearNotifications => {
                state.notifications.clear();
            }
        }

        state
    }
}

/// Apply `f` to the cached article with the given id, if present. Other
/// articles and their order are untouched.
fn with_article(state: &mut AppState, id: &ArticleId, f: impl FnOnce(&mut Article)) {
    if let Some(article) = state.articles.iter_mut().find(|a| &a.id == id) {
        f(article);
    }
}
