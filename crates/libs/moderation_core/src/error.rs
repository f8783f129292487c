use crate::store::{BlobError, StoreError};
use color_eyre::eyre;
use thiserror::Error;

/// Failure taxonomy of the moderation core.
///
/// The ingress layer maps each variant to a distinct response class so a
/// client can tell "retry later" (store/storage unavailable) from "bad
/// request" (validation, not found).
#[derive(Debug, Error)]
pub enum ModerationError {
    #[error("{0}")]
    Validation(String),

    #[error("media item not found: {0}")]
    NotFound(String),

    #[error("item store unavailable")]
    StoreUnavailable(#[from] StoreError),

    #[error("blob storage unavailable")]
    StorageUnavailable(#[from] BlobError),

    #[error("internal error")]
    Internal(#[from] eyre::Report),
}
