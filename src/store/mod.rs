//! Unidirectional data flow for application state.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ Snapshot ──→ Subscribers
//!    ↑                                    │
//!    └────────────────────────────────────┘
//! ```
//!
//! - **Snapshot**: immutable value of the entire state at one point in time
//! - **Action**: user interactions or service confirmations
//! - **Reducer**: pure function that maps (snapshot, action) to the next snapshot
//!
//! The [`Store`] serializes transitions and publishes each new snapshot
//! atomically; readers holding an old snapshot never see it change.

mod action;
mod reducer;
mod state;

pub use action::AppAction;
pub use reducer::AppReducer;
pub use state::AppState;

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

/// Marker trait for snapshot types.
///
/// Snapshots should be:
/// - Immutable (Clone to create new snapshots)
/// - Self-contained (all data needed to render a view)
/// - Comparable (PartialEq for detecting changes)
pub trait Snapshot: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for action types.
///
/// Actions represent user interactions (like, bookmark, follow) and
/// confirmed service results (fetched articles). They are processed by
/// reducers to produce new snapshots.
pub trait Action: Send + 'static {}

/// Reducer transforms a snapshot based on an action.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (Snapshot, Action) -> Snapshot
pub trait Reducer {
    /// The snapshot type this reducer operates on.
    type State: Snapshot;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new snapshot.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}

/// Shared application state container.
///
/// Cheap to clone; all clones dispatch into the same state. Writers
/// serialize on the write lock, readers clone the current `Arc` snapshot
/// without blocking each other, and publication of a new snapshot is an
/// atomic swap.
#[derive(Clone)]
pub struct Store {
    current: Arc<RwLock<Arc<AppState>>>,
    tx: watch::Sender<Arc<AppState>>,
}

impl Store {
    /// Create a store holding the initial empty state.
    pub fn new() -> Self {
        let initial = Arc::new(AppState::default());
        let (tx, _rx) = watch::channel(initial.clone());
        Self {
            current: Arc::new(RwLock::new(initial)),
            tx,
        }
    }

    /// Current snapshot.
    ///
    /// The returned `Arc` stays valid and unchanged across later
    /// dispatches; callers re-read or subscribe to observe updates.
    pub fn state(&self) -> Arc<AppState> {
        self.current.read().clone()
    }

    /// Run one transition and publish the resulting snapshot.
    pub fn dispatch(&self, action: AppAction) {
        let mut guard = self.current.write();
        let next = Arc::new(AppReducer::reduce((**guard).clone(), action));
        *guard = next.clone();
        self.tx.send_replace(next);
    }

    /// Subscribe to snapshot publications.
    ///
    /// The receiver starts at the snapshot current at subscription time.
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.tx.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
