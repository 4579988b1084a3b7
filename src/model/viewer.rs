//! Viewer identity gating personalized actions.

use serde::{Deserialize, Serialize};

use super::article::UserId;

/// The current viewer, either signed in or browsing anonymously.
///
/// Anonymous viewers can read and share; like and bookmark require a
/// signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Viewer {
    #[default]
    Anonymous,
    SignedIn(UserId),
}

impl Viewer {
    pub fn signed_in(id: impl Into<String>) -> Self {
        Self::SignedIn(UserId::new(id))
    }

    /// The signed-in user id, if any.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Self::Anonymous => None,
            Self::SignedIn(id) => Some(id),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }
}
