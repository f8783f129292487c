use crate::{ApiSettings, LoggingSettings, ModerationSettings, RawSettings};
use serde::Deserialize;
use std::path::{PathBuf, absolute};

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub storage: StorageSettings,
    pub moderation: ModerationSettings,
    pub logging: LoggingSettings,
}

/// Blob storage paths, absolute after settings load.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub upload_folder: PathBuf,
    pub max_upload_bytes: usize,
}

impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        let upload_root = absolute(&raw.storage.upload_folder).expect("Invalid upload_folder");
        let storage = StorageSettings {
            upload_folder: upload_root,
            max_upload_bytes: raw.storage.max_upload_bytes,
        };

        Self {
            api: raw.api,
            storage,
            moderation: raw.moderation,
            logging: raw.logging,
        }
    }
}
