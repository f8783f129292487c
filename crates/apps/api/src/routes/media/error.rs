use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use moderation_core::{BlobError, ModerationError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("{0}")]
    Validation(String),

    #[error("media item not found: {0}")]
    NotFound(String),

    #[error("item store unavailable")]
    StoreUnavailable,

    #[error("blob storage unavailable")]
    StorageUnavailable,

    #[error("internal error")]
    Internal(#[from] eyre::Report),
}

impl IntoResponse for MediaError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Media item not found: {id}"),
            ),
            Self::StoreUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "The item store is unavailable, try again later.".to_string(),
            ),
            Self::StorageUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Blob storage is unavailable, try again later.".to_string(),
            ),
            Self::Internal(ref report) => {
                error!("Internal error: {:?}", report);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected internal error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<ModerationError> for MediaError {
    fn from(err: ModerationError) -> Self {
        match err {
            ModerationError::Validation(msg) => Self::Validation(msg),
            ModerationError::NotFound(id) => Self::NotFound(id),
            ModerationError::StoreUnavailable(e) => {
                error!("Item store failure: {}", e);
                Self::StoreUnavailable
            }
            ModerationError::StorageUnavailable(e) => {
                error!("Blob storage failure: {}", e);
                Self::StorageUnavailable
            }
            ModerationError::Internal(report) => Self::Internal(report),
        }
    }
}

impl From<BlobError> for MediaError {
    fn from(err: BlobError) -> Self {
        error!("Blob storage failure: {}", err);
        Self::StorageUnavailable
    }
}
