use crate::api_state::ApiContext;
use crate::routes::media::handlers::{
    list_media_handler, media_websocket_handler, moderate_media_handler, upload_media_handler,
};
use app_state::StorageSettings;
use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    routing::{get, post},
};

pub fn media_public_router(storage: &StorageSettings) -> Router<ApiContext> {
    Router::new()
        .route("/api/upload", post(upload_media_handler))
        .route_layer(DefaultBodyLimit::max(storage.max_upload_bytes))
        .route("/api/media", get(list_media_handler))
        .route("/api/moderate/{id}", post(moderate_media_handler))
}

pub fn media_websocket_router() -> Router<ApiContext> {
    Router::new().route("/api/media/ws", get(media_websocket_handler))
}
