use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

/// A user-submitted media record as persisted by the item store.
///
/// Records are owned by the store; the moderation queue never caches one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MediaItem {
    /// Store-assigned opaque identifier, immutable after creation.
    pub id: String,
    /// Public URL returned by the blob gateway, set once at creation.
    pub url: String,
    pub author: String,
    pub status: MediaStatus,
    /// Server-assigned, monotonic with insertion order.
    pub created_at: DateTime<Utc>,
}

/// Lifecycle state of a media item.
///
/// `Pending` is the sole initial state. `Approved` and `Rejected` are
/// terminal; no reversal path is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaStatus {
    Pending,
    Approved,
    Rejected,
}

impl MediaStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// True for the states a moderator can move an item into.
    #[must_use]
    pub fn is_verdict(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl fmt::Display for MediaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

/// A status string from a client that does not name a known state.
#[derive(Debug, Clone, Error)]
#[error("unknown media status: '{0}'")]
pub struct UnknownStatus(pub String);

/// Fields the caller provides on creation; the store assigns `id` and
/// `created_at`.
#[derive(Debug, Clone)]
pub struct NewMediaItem {
    pub url: String,
    pub author: String,
    pub status: MediaStatus,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            MediaStatus::Pending,
            MediaStatus::Approved,
            MediaStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<MediaStatus>().unwrap(), status);
        }
        assert!("archived".parse::<MediaStatus>().is_err());
    }

    #[test]
    fn item_serializes_with_lowercase_status() {
        let item = MediaItem {
            id: "abc".into(),
            url: "http://localhost/uploads/media/1-a.jpg".into(),
            author: "Ana".into(),
            status: MediaStatus::Pending,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["status"], "pending");
        assert_eq!(value["author"], "Ana");
    }
}
