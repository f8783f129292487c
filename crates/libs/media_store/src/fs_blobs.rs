use async_trait::async_trait;
use chrono::Utc;
use moderation_core::{BlobError, BlobGateway};
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

/// Blob gateway writing uploads to local disk, addressed back through the
/// API's static `/uploads` mount.
///
/// Object names are `{millis}-{original name}`, so the same file uploaded
/// twice yields two distinct, stable URLs.
pub struct FsBlobGateway {
    upload_root: PathBuf,
    public_base_url: String,
}

impl FsBlobGateway {
    #[must_use]
    pub fn new(upload_root: PathBuf, public_base_url: impl Into<String>) -> Self {
        let public_base_url = public_base_url.into().trim_end_matches('/').to_owned();
        Self {
            upload_root,
            public_base_url,
        }
    }
}

#[async_trait]
impl BlobGateway for FsBlobGateway {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        file_name: &str,
        folder: &str,
    ) -> Result<String, BlobError> {
        let stamped = format!("{}-{}", Utc::now().timestamp_millis(), sanitize(file_name));
        let dir = self.upload_root.join(folder);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| BlobError::Unavailable(e.to_string()))?;

        let path = dir.join(&stamped);
        fs::write(&path, &bytes)
            .await
            .map_err(|e| BlobError::Unavailable(e.to_string()))?;
        info!(path = %path.display(), content_type, size = bytes.len(), "stored blob");

        Ok(format!("{}/uploads/{folder}/{stamped}", self.public_base_url))
    }
}

/// Keeps client-supplied names path-safe.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[tokio::test]
    async fn upload_writes_the_blob_and_returns_its_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = FsBlobGateway::new(dir.path().to_path_buf(), "http://localhost:3000/");

        let url = gateway
            .upload(b"jpeg bytes".to_vec(), "image/jpeg", "my photo.jpg", "media")
            .await
            .unwrap();

        assert!(url.starts_with("http://localhost:3000/uploads/media/"));
        assert!(url.ends_with("-my_photo.jpg"));

        let name = url.rsplit('/').next().unwrap();
        let on_disk = dir.path().join("media").join(name);
        assert_eq!(std::fs::read(on_disk).unwrap(), b"jpeg bytes");
    }
}
