//! Insight API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{ApiResult, AppJson};
use crate::models::{Insight, InsightCreate, InsightUpdate};
use crate::AppState;

/// GET /api/insights - List all insights, published or not.
pub async fn list_insights(State(state): State<AppState>) -> ApiResult<Vec<Insight>> {
    Ok(Json(state.gateway.list().await?))
}

/// GET /api/insights/:id - Get a single insight for the article page.
pub async fn get_insight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Insight> {
    Ok(Json(state.gateway.get(&id).await?))
}

/// POST /api/insights - Create a new insight.
pub async fn create_insight(
    State(state): State<AppState>,
    AppJson(request): AppJson<InsightCreate>,
) -> ApiResult<Insight> {
    Ok(Json(state.gateway.create(request).await?))
}

/// PUT /api/insights/:id - Update an insight.
pub async fn update_insight(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<InsightUpdate>,
) -> ApiResult<Insight> {
    Ok(Json(state.gateway.update(&id, request).await?))
}
