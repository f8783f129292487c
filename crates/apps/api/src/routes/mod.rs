mod api_doc;
pub mod media;
pub mod root;

use crate::api_state::ApiContext;
use crate::routes::api_doc::ApiDoc;
use app_state::StorageSettings;
use axum::routing::get;
use axum::{Json, Router};
use self::media::router::{media_public_router, media_websocket_router};
use self::root::router::root_public_router;
use utoipa::OpenApi;

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .route("/openapi.json", get(openapi_json))
        .merge(public_routes(&api_state.settings.storage))
        .merge(websocket_routes())
        .with_state(api_state)
}

fn public_routes(storage: &StorageSettings) -> Router<ApiContext> {
    Router::new()
        .merge(root_public_router())
        .merge(media_public_router(storage))
}

fn websocket_routes() -> Router<ApiContext> {
    media_websocket_router()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
