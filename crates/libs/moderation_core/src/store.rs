use crate::media::{MediaItem, MediaStatus, NewMediaItem};
use async_trait::async_trait;
use thiserror::Error;

/// The external document store owning `MediaItem` records.
///
/// Implementations must be read-your-writes consistent from the calling
/// process. `query` orders newest-first by `created_at`; ordering is part of
/// the store contract, callers never re-sort.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persists a new record, assigning its id and server timestamp.
    async fn insert(&self, item: NewMediaItem) -> Result<MediaItem, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<MediaItem>, StoreError>;

    /// All records matching `status`, or every record when `None`, ordered
    /// by `created_at` descending.
    async fn query(&self, status: Option<MediaStatus>) -> Result<Vec<MediaItem>, StoreError>;

    /// Overwrites the status field. Last write wins; there is no
    /// precondition on the current value.
    async fn update_status(&self, id: &str, status: MediaStatus) -> Result<(), StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item store unavailable: {0}")]
    Unavailable(String),
}

/// External blob storage returning a stable public URL per upload.
#[async_trait]
pub trait BlobGateway: Send + Sync {
    /// Stores `bytes` under `folder` and returns the public URL. Safe for
    /// the caller to retry; the gateway itself never retries.
    async fn upload(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        file_name: &str,
        folder: &str,
    ) -> Result<String, BlobError>;
}

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("blob storage unavailable: {0}")]
    Unavailable(String),
}
