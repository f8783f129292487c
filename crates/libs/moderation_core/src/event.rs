use crate::media::MediaItem;
use serde::{Deserialize, Serialize};

/// A queue state change, fanned out to connected observers.
///
/// Events are ephemeral: never persisted and never replayed to an observer
/// that connects later. A fresh observer reconstructs its view by querying
/// the store, not by reading history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum BroadcastEvent {
    /// A new submission entered the pending queue.
    #[serde(rename = "new_pending_item")]
    NewPending(MediaItem),
    /// A pending item was approved; carries the full record.
    #[serde(rename = "item_approved")]
    Approved(MediaItem),
    /// An item was rejected; carries only the id.
    #[serde(rename = "item_rejected")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::media::MediaStatus;
    use chrono::Utc;

    fn item() -> MediaItem {
        MediaItem {
            id: "m1".into(),
            url: "http://localhost/uploads/media/1-a.jpg".into(),
            author: "Ana".into(),
            status: MediaStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn new_pending_wire_format() {
        let value = serde_json::to_value(BroadcastEvent::NewPending(item())).unwrap();
        assert_eq!(value["type"], "new_pending_item");
        assert_eq!(value["payload"]["id"], "m1");
        assert_eq!(value["payload"]["status"], "pending");
    }

    #[test]
    fn rejected_carries_only_the_id() {
        let value = serde_json::to_value(BroadcastEvent::Rejected("m1".into())).unwrap();
        assert_eq!(value["type"], "item_rejected");
        assert_eq!(value["payload"], "m1");
    }
}
