//! Notification records carried in the app state.
//!
//! The notification contract is owned by other parts of the platform;
//! the core stores them as opaque payloads in arrival order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single notification with an opaque payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub payload: serde_json::Value,
}

impl Notification {
    /// Wrap a payload, stamping id and arrival time.
    pub fn new(payload: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assigns_unique_ids() {
        let a = Notification::new(serde_json::json!({"kind": "follow"}));
        let b = Notification::new(serde_json::json!({"kind": "follow"}));
        assert_ne!(a.id, b.id);
    }
}
