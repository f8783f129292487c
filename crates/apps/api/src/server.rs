use crate::api_state::ApiContext;
use crate::create_router;
use app_state::AppSettings;
use axum::Router;
use axum::routing::get_service;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use http::{HeaderValue, header};
use media_store::{FsBlobGateway, InMemoryItemStore};
use moderation_core::{BlobGateway, Broadcaster, ModerationQueue};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::fs;
use tower_http::cors;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Wires the moderation core to its adapters.
#[must_use]
pub fn build_context(settings: AppSettings) -> ApiContext {
    let broadcaster = Broadcaster::new(settings.moderation.broadcast_capacity);
    let store = Arc::new(InMemoryItemStore::new());
    let queue = Arc::new(ModerationQueue::new(
        store,
        broadcaster.clone(),
        settings.moderation.default_author.clone(),
    ));
    let blobs: Arc<dyn BlobGateway> = Arc::new(FsBlobGateway::new(
        settings.storage.upload_folder.clone(),
        settings.api.public_url.clone(),
    ));

    ApiContext {
        queue,
        broadcaster,
        blobs,
        settings,
    }
}

/// The full application: API routes plus layers and the static blob mount.
#[must_use]
pub fn build_app(api_state: ApiContext) -> Router {
    // --- CORS Configuration ---
    let allowed_origins: Vec<HeaderValue> = api_state
        .settings
        .api
        .allowed_origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(hv) => Some(hv),
            Err(e) => {
                error!("Invalid CORS origin configured: {} - Error: {}", s, e);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods(cors::Any)
        .allow_origin(allowed_origins)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]);

    // Uploaded blobs are immutable, so clients may cache them forever.
    let serve_dir = ServeDir::new(&api_state.settings.storage.upload_folder);
    let cache_layer = SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=31536000, immutable"),
    );

    create_router(api_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .nest_service("/uploads", get_service(serve_dir).layer(cache_layer))
}

pub async fn serve(settings: AppSettings) -> Result<()> {
    info!("🚀 Initializing server...");
    fs::create_dir_all(&settings.storage.upload_folder).await?;

    let addr: SocketAddr = format!("{}:{}", settings.api.host, settings.api.port)
        .parse()
        .map_err(|e| eyre!("Invalid address: {}", e))?;

    let app = build_app(build_context(settings));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🐸 Server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
