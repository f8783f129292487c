#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod fs_blobs;
mod memory;

pub use fs_blobs::FsBlobGateway;
pub use memory::InMemoryItemStore;
