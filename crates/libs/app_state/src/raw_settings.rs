use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub api: ApiSettings,
    pub storage: RawStorageSettings,
    pub moderation: ModerationSettings,
    pub logging: LoggingSettings,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
    pub allowed_origins: Vec<String>,
    /// Base URL clients reach this server under; also the prefix of the
    /// public URLs handed out for stored blobs.
    pub public_url: String,
}

/// Where uploaded blobs land on disk, relative paths resolved at load time.
#[derive(Debug, Deserialize, Clone)]
pub struct RawStorageSettings {
    pub upload_folder: PathBuf,
    pub max_upload_bytes: usize,
}

/// Moderation queue behavior.
#[derive(Debug, Deserialize, Clone)]
pub struct ModerationSettings {
    /// Author recorded on submissions that do not name one.
    pub default_author: String,
    /// Per-observer event queue capacity in the broadcast registry.
    pub broadcast_capacity: usize,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    /// Default `EnvFilter` directive, overridable via `RUST_LOG`.
    pub level: String,
}
