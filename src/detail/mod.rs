//! Article detail view: state machine and controller.
//!
//! The reducer owns every state transition; the controller owns the
//! effects (service calls, store propagation) and feeds their outcomes
//! back in as intents.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::ArticleDetailController;
pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::{ArticleDetailState, ArticleView, ToggleState};
