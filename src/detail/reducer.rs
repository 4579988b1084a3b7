//! Reducer for the article detail view.

use crate::store::Reducer;

use super::intent::DetailIntent;
use super::state::{ArticleDetailState, ArticleView, ToggleState};

/// Reducer for detail view state transitions.
///
/// Fetch outcomes only apply while `Loading`; toggle outcomes only apply
/// while `Loaded`. Stale intents fall through and leave the state as is.
pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = ArticleDetailState;
    type Action = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Action) -> Self::State {
        match intent {
            DetailIntent::Load { slug } => ArticleDetailState::Loading { slug },

            DetailIntent::Fetched { article } => match state {
                ArticleDetailState::Loading { .. } => {
                    ArticleDetailState::Loaded(ArticleView::new(article))
                }
                other => other,
            },

            DetailIntent::Missing => match state {
                ArticleDetailState::Loading { slug } => ArticleDetailState::NotFound { slug },
                other => other,
            },

            DetailIntent::FetchFailed { error } => match state {
                ArticleDetailState::Loading { slug } => {
                    ArticleDetailState::Failed { slug, error }
                }
                other => other,
            },

            DetailIntent::LikePending => match state {
                ArticleDetailState::Loaded(mut view) => {
                    view.like = ToggleState::Pending;
                    ArticleDetailState::Loaded(view)
                }
                other => other,
            },

            DetailIntent::LikeConfirmed { liked } => match state {
                ArticleDetailState::Loaded(mut view) => {
                    view.article.likes_count = if liked {
                        view.article.likes_count + 1
                    } else {
                        view.article.likes_count.saturating_sub(1)
                    };
                    view.article.is_liked = liked;
                    view.like = ToggleState::Settled;
                    ArticleDetailState::Loaded(view)
                }
                other => other,
            },

            DetailIntent::LikeFailed { error } => match state {
                ArticleDetailState::Loaded(mut view) => {
                    view.like = ToggleState::Failed { error };
                    ArticleDetailState::Loaded(view)
                }
                other => other,
            },

            DetailIntent::BookmarkPending => match state {
                ArticleDetailState::Loaded(mut view) => {
                    view.bookmark = ToggleState::Pending;
                    ArticleDetailState::Loaded(view)
                }
                other => other,
            },

            DetailIntent::BookmarkConfirmed { bookmarked } => match state {
                ArticleDetailState::Loaded(mut view) => {
                    view.article.is_bookmarked = bookmarked;
                    view.bookmark = ToggleState::Settled;
                    ArticleDetailState::Loaded(view)
                }
                other => other,
            },

            DetailIntent::BookmarkFailed { error } => match state {
                ArticleDetailState::Loaded(mut view) => {
                    view.bookmark = ToggleState::Failed { error };
                    ArticleDetailState::Loaded(view)
                }
                other => other,
            },

            DetailIntent::Reset => ArticleDetailState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Article, ArticleId, AuthorProfile, UserId};

    fn article(likes: u64, liked: bool) -> Article {
        Article {
            id: ArticleId::new("a1"),
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            excerpt: None,
            content: Vec::new(),
            author: AuthorProfile {
                id: UserId::new("u1"),
                full_name: "Ada".to_string(),
                avatar_url: None,
                is_verified: false,
                followers_count: 0,
            },
            tags: Vec::new(),
            published_at: None,
            views_count: 0,
            likes_count: likes,
            reading_time_minutes: 1,
            is_liked: liked,
            is_bookmarked: false,
        }
    }

    fn loading() -> ArticleDetailState {
        ArticleDetailState::Loading {
            slug: "hello".to_string(),
        }
    }

    fn loaded(likes: u64, liked: bool) -> ArticleDetailState {
        ArticleDetailState::Loaded(ArticleView::new(article(likes, liked)))
    }

    #[test]
    fn load_enters_loading_from_anywhere() {
        for state in [
            ArticleDetailState::Idle,
            loaded(0, false),
            ArticleDetailState::NotFound {
                slug: "old".to_string(),
            },
        ] {
            let next = DetailReducer::reduce(
                state,
                DetailIntent::Load {
                    slug: "hello".to_string(),
                },
            );
            assert!(next.is_loading());
            assert_eq!(next.slug(), Some("hello"));
        }
    }

    #[test]
    fn fetched_transitions_to_loaded() {
        let next = DetailReducer::reduce(
            loading(),
            DetailIntent::Fetched {
                article: article(3, false),
            },
        );
        let view = next.view().expect("expected Loaded");
        assert_eq!(view.article.likes_count, 3);
        assert_eq!(view.like, ToggleState::Settled);
    }

    #[test]
    fn missing_transitions_to_not_found_with_slug() {
        let next = DetailReducer::reduce(loading(), DetailIntent::Missing);
        assert_eq!(
            next,
            ArticleDetailState::NotFound {
                slug: "hello".to_string()
            }
        );
    }

    #[test]
    fn fetch_failed_is_retryable() {
        let next = DetailReducer::reduce(
            loading(),
            DetailIntent::FetchFailed {
                error: "timeout".to_string(),
            },
        );
        assert!(next.can_retry());
        assert_eq!(next.slug(), Some("hello"));
    }

    #[test]
    fn stale_fetch_outcomes_are_ignored_outside_loading() {
        let state = loaded(3, false);
        let next = DetailReducer::reduce(state.clone(), DetailIntent::Missing);
        assert_eq!(next, state);
    }

    #[test]
    fn like_confirmed_applies_count_and_flag() {
        let pending = DetailReducer::reduce(loaded(5, false), DetailIntent::LikePending);
        assert!(pending.view().unwrap().like.is_pending());

        let next = DetailReducer::reduce(pending, DetailIntent::LikeConfirmed { liked: true });
        let view = next.view().unwrap();
        assert_eq!(view.article.likes_count, 6);
        assert!(view.article.is_liked);
        assert_eq!(view.like, ToggleState::Settled);
    }

    #[test]
    fn unlike_confirmed_floors_at_zero() {
        let next = DetailReducer::reduce(loaded(0, true), DetailIntent::LikeConfirmed {
            liked: false,
        });
        let view = next.view().unwrap();
        assert_eq!(view.article.likes_count, 0);
        assert!(!view.article.is_liked);
    }

    #[test]
    fn like_failed_keeps_confirmed_value() {
        let pending = DetailReducer::reduce(loaded(5, false), DetailIntent::LikePending);
        let next = DetailReducer::reduce(
            pending,
            DetailIntent::LikeFailed {
                error: "upstream".to_string(),
            },
        );
        let view = next.view().unwrap();
        assert_eq!(view.article.likes_count, 5);
        assert!(!view.article.is_liked);
        assert_eq!(view.like.error_message(), Some("upstream"));
    }

    #[test]
    fn bookmark_confirmed_sets_flag_only() {
        let next = DetailReducer::reduce(
            loaded(5, false),
            DetailIntent::BookmarkConfirmed { bookmarked: true },
        );
        let view = next.view().unwrap();
        assert!(view.article.is_bookmarked);
        assert_eq!(view.article.likes_count, 5);
    }

    #[test]
    fn reset_returns_to_idle() {
        let next = DetailReducer::reduce(loaded(5, false), DetailIntent::Reset);
        assert_eq!(next, ArticleDetailState::Idle);
    }
}
