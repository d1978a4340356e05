//! Performance API endpoints.

use axum::{extract::State, Json};

use super::{ApiResult, AppJson};
use crate::models::{Performance, PerformanceUpdate};
use crate::AppState;

/// GET /api/performance - Get performance figures.
pub async fn get_performance(State(state): State<AppState>) -> ApiResult<Performance> {
    Ok(Json(state.gateway.get_singleton().await?))
}

/// PUT /api/performance - Update the supplied performance fields.
pub async fn update_performance(
    State(state): State<AppState>,
    AppJson(request): AppJson<PerformanceUpdate>,
) -> ApiResult<Performance> {
    Ok(Json(state.gateway.update_singleton(request).await?))
}
