//! Profile API endpoints.

use axum::{extract::State, Json};

use super::{ApiResult, AppJson};
use crate::models::{Profile, ProfileUpdate};
use crate::AppState;

/// GET /api/profile - Get the profile, initializing it from defaults if needed.
pub async fn get_profile(State(state): State<AppState>) -> ApiResult<Profile> {
    Ok(Json(state.gateway.get_singleton().await?))
}

/// PUT /api/profile - Update the supplied profile fields.
pub async fn update_profile(
    State(state): State<AppState>,
    AppJson(request): AppJson<ProfileUpdate>,
) -> ApiResult<Profile> {
    Ok(Json(state.gateway.update_singleton(request).await?))
}
