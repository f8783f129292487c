#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod broadcast;
pub mod error;
pub mod event;
pub mod media;
pub mod queue;
pub mod store;

pub use broadcast::{Broadcaster, Observer};
pub use error::ModerationError;
pub use event::BroadcastEvent;
pub use media::{MediaItem, MediaStatus, NewMediaItem, UnknownStatus};
pub use queue::ModerationQueue;
pub use store::{BlobError, BlobGateway, ItemStore, StoreError};
