use crate::routes::{media, root};
use moderation_core::{MediaItem, MediaStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        root::handlers::health_check,
        // Media handlers
        media::handlers::upload_media_handler,
        media::handlers::list_media_handler,
        media::handlers::moderate_media_handler,
        media::handlers::media_websocket_handler,
    ),
    components(
        schemas(
            MediaItem,
            MediaStatus,
            media::interfaces::ModerateBody,
        ),
    ),
    tags(
        (name = "Media", description = "Submission, listing and moderation of media items"),
        (name = "System", description = "Health check"),
    )
)]
pub struct ApiDoc;
