use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use moderation_core::{ItemStore, MediaItem, MediaStatus, NewMediaItem, StoreError};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Record as held by the store. `seq` breaks `created_at` ties so that query
/// order stays monotonic with insertion order.
#[derive(Clone)]
struct StoredItem {
    item: MediaItem,
    seq: u64,
}

/// In-memory document store implementing the `ItemStore` port.
///
/// Assigns UUID ids and server timestamps on insert. `update_status` is
/// last-write-wins with no version check, matching the contract the
/// moderation queue is written against.
pub struct InMemoryItemStore {
    items: DashMap<String, StoredItem>,
    next_seq: AtomicU64,
}

impl InMemoryItemStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn insert(&self, item: NewMediaItem) -> Result<MediaItem, StoreError> {
        let id = Uuid::new_v4().to_string();
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let record = MediaItem {
            id: id.clone(),
            url: item.url,
            author: item.author,
            status: item.status,
            created_at: Utc::now(),
        };
        self.items.insert(id, StoredItem {
            item: record.clone(),
            seq,
        });
        Ok(record)
    }

    async fn get(&self, id: &str) -> Result<Option<MediaItem>, StoreError> {
        Ok(self.items.get(id).map(|entry| entry.item.clone()))
    }

    async fn query(&self, status: Option<MediaStatus>) -> Result<Vec<MediaItem>, StoreError> {
        let mut rows: Vec<StoredItem> = self
            .items
            .iter()
            .filter(|entry| status.is_none_or(|s| entry.item.status == s))
            .map(|entry| entry.value().clone())
            .collect();
        rows.sort_by(|a, b| (b.item.created_at, b.seq).cmp(&(a.item.created_at, a.seq)));
        Ok(rows.into_iter().map(|row| row.item).collect())
    }

    async fn update_status(&self, id: &str, status: MediaStatus) -> Result<(), StoreError> {
        // No delete path exists, so a missing id here means the caller
        // skipped `get`; the write is simply a no-op then.
        if let Some(mut entry) = self.items.get_mut(id) {
            entry.item.status = status;
        }
        Ok(())
    }
}
