use app_state::AppSettings;
use axum::extract::FromRef;
use moderation_core::{BlobGateway, Broadcaster, ModerationQueue};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApiContext {
    pub queue: Arc<ModerationQueue>,
    pub broadcaster: Broadcaster,
    pub blobs: Arc<dyn BlobGateway>,
    pub settings: AppSettings,
}

// These impls let axum extract individual parts of the context, for handlers
// and middleware that only need one of them.
impl FromRef<ApiContext> for Arc<ModerationQueue> {
    fn from_ref(state: &ApiContext) -> Self {
        state.queue.clone()
    }
}

impl FromRef<ApiContext> for Broadcaster {
    fn from_ref(state: &ApiContext) -> Self {
        state.broadcaster.clone()
    }
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}
