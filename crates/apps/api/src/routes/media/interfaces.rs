use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Query parameters for the media listing endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListMediaParams {
    /// Optional status filter: "pending", "approved" or "rejected".
    pub status: Option<String>,
}

/// Body of a moderation request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ModerateBody {
    /// Target status: "approved" or "rejected".
    pub status: String,
}
