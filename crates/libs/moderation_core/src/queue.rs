use crate::broadcast::Broadcaster;
use crate::error::ModerationError;
use crate::event::BroadcastEvent;
use crate::media::{MediaItem, MediaStatus, NewMediaItem};
use crate::store::ItemStore;
use std::sync::Arc;
use tracing::info;

/// Owns the lifecycle of a media item from submission to a terminal
/// moderation state.
///
/// Every read and write goes through the item store; the queue holds no
/// private copy of any record, so reads are always fresh. There is no per-id
/// locking either: concurrent calls on the same id interleave freely.
pub struct ModerationQueue {
    store: Arc<dyn ItemStore>,
    broadcaster: Broadcaster,
    default_author: String,
}

impl ModerationQueue {
    #[must_use]
    pub fn new(
        store: Arc<dyn ItemStore>,
        broadcaster: Broadcaster,
        default_author: impl Into<String>,
    ) -> Self {
        Self {
            store,
            broadcaster,
            default_author: default_author.into(),
        }
    }

    /// Persists a new pending item and announces it.
    ///
    /// The `NewPending` event is emitted only after the store confirms the
    /// write; on store failure no partial record is visible and no event
    /// fires.
    pub async fn submit(
        &self,
        url: String,
        author: Option<String>,
    ) -> Result<MediaItem, ModerationError> {
        let author = author
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| self.default_author.clone());
        let draft = NewMediaItem {
            url,
            author,
            status: MediaStatus::Pending,
        };

        let item = self.store.insert(draft).await?;
        info!(id = %item.id, author = %item.author, "media item submitted");
        self.broadcaster.emit(&BroadcastEvent::NewPending(item.clone()));
        Ok(item)
    }

    /// Items matching `status`, or every item when `None`; newest first per
    /// the store's query contract.
    pub async fn list(
        &self,
        status: Option<MediaStatus>,
    ) -> Result<Vec<MediaItem>, ModerationError> {
        Ok(self.store.query(status).await?)
    }

    /// Applies a moderation verdict and announces the outcome.
    ///
    /// Accepts any current state: there is no compare-and-swap and no guard
    /// against re-moderating a terminal item, so two concurrent calls on the
    /// same id race and the store's last write wins. Both calls still emit
    /// their events; the loser's event can describe a status the store no
    /// longer holds. Known gap, kept to match the store's documented
    /// last-write-wins semantics.
    pub async fn moderate(
        &self,
        id: &str,
        status: MediaStatus,
    ) -> Result<MediaItem, ModerationError> {
        if !status.is_verdict() {
            return Err(ModerationError::Validation(format!(
                "status must be 'approved' or 'rejected', got '{status}'"
            )));
        }

        let Some(current) = self.store.get(id).await? else {
            return Err(ModerationError::NotFound(id.to_owned()));
        };

        self.store.update_status(id, status).await?;
        let item = MediaItem { status, ..current };
        info!(id = %item.id, status = %status, "media item moderated");

        let event = match status {
            MediaStatus::Approved => BroadcastEvent::Approved(item.clone()),
            _ => BroadcastEvent::Rejected(item.id.clone()),
        };
        self.broadcaster.emit(&event);
        Ok(item)
    }

    /// The broadcast registry fed by this queue.
    #[must_use]
    pub fn broadcaster(&self) -> &Broadcaster {
        &self.broadcaster
    }
}
