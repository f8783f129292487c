use crate::api_state::ApiContext;
use crate::routes::media::error::MediaError;
use crate::routes::media::interfaces::{ListMediaParams, ModerateBody};
use crate::routes::media::websocket::handle_media_socket;
use axum::Json;
use axum::extract::{Multipart, Path, Query, State, WebSocketUpgrade};
use axum::http::StatusCode;
use moderation_core::{MediaItem, MediaStatus};

/// Accept a media submission.
///
/// The file lands in blob storage first; only after the store confirms the
/// pending record do connected observers hear about it.
///
/// # Errors
///
/// Returns a `MediaError` if no file field is present or a backing service
/// is unavailable.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "Media",
    responses(
        (status = 201, description = "Submission accepted into the pending queue.", body = MediaItem),
        (status = 400, description = "No file uploaded."),
        (status = 503, description = "Blob storage or the item store is unavailable."),
    )
)]
pub async fn upload_media_handler(
    State(context): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<MediaItem>), MediaError> {
    let mut file: Option<(Vec<u8>, String, String)> = None;
    let mut author: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| MediaError::Validation(e.to_string()))?
    {
        match field.name() {
            Some("media") => {
                let file_name = field.file_name().unwrap_or("upload.bin").to_owned();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_owned();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| MediaError::Validation(e.to_string()))?;
                file = Some((bytes.to_vec(), content_type, file_name));
            }
            Some("author") => {
                author = field.text().await.ok();
            }
            _ => {}
        }
    }

    let Some((bytes, content_type, file_name)) = file else {
        return Err(MediaError::Validation("No file uploaded.".to_owned()));
    };
    if bytes.is_empty() {
        return Err(MediaError::Validation("Uploaded file is empty.".to_owned()));
    }

    let url = context
        .blobs
        .upload(bytes, &content_type, &file_name, "media")
        .await?;
    let item = context.queue.submit(url, author).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// List media items, newest first, optionally filtered by status.
///
/// # Errors
///
/// Returns a `MediaError` on an unknown status value or a store failure.
#[utoipa::path(
    get,
    path = "/api/media",
    tag = "Media",
    params(ListMediaParams),
    responses(
        (status = 200, description = "Matching media items, newest first.", body = Vec<MediaItem>),
        (status = 400, description = "Unknown status filter."),
        (status = 503, description = "The item store is unavailable."),
    )
)]
pub async fn list_media_handler(
    State(context): State<ApiContext>,
    Query(params): Query<ListMediaParams>,
) -> Result<Json<Vec<MediaItem>>, MediaError> {
    let status = params
        .status
        .as_deref()
        .map(str::parse::<MediaStatus>)
        .transpose()
        .map_err(|e| MediaError::Validation(e.to_string()))?;

    let items = context.queue.list(status).await?;
    Ok(Json(items))
}

/// Apply a moderation verdict to a pending item.
///
/// # Errors
///
/// Returns a `MediaError` if the status is not a verdict, the id is unknown,
/// or the store is unavailable.
#[utoipa::path(
    post,
    path = "/api/moderate/{id}",
    tag = "Media",
    request_body = ModerateBody,
    responses(
        (status = 200, description = "The item after the status update.", body = MediaItem),
        (status = 400, description = "Status is not 'approved' or 'rejected'."),
        (status = 404, description = "No item exists for this id."),
        (status = 503, description = "The item store is unavailable."),
    )
)]
pub async fn moderate_media_handler(
    State(context): State<ApiContext>,
    Path(id): Path<String>,
    Json(body): Json<ModerateBody>,
) -> Result<Json<MediaItem>, MediaError> {
    let status: MediaStatus = body
        .status
        .parse()
        .map_err(|e: moderation_core::UnknownStatus| MediaError::Validation(e.to_string()))?;

    let item = context.queue.moderate(&id, status).await?;
    Ok(Json(item))
}

/// Real-time queue updates via WebSocket.
///
/// Each queue change arrives as one JSON text frame shaped
/// `{"type": ..., "payload": ...}`. No backlog is replayed on connect;
/// clients fetch the current queue through `GET /api/media` instead.
#[utoipa::path(
    get,
    path = "/api/media/ws",
    tag = "Media",
    responses(
        (status = 101, description = "WebSocket upgrade")
    )
)]
pub async fn media_websocket_handler(
    ws: WebSocketUpgrade,
    State(context): State<ApiContext>,
) -> axum::response::Response {
    ws.on_upgrade(move |socket| handle_media_socket(socket, context))
}
