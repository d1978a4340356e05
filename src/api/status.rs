//! Status check API endpoints.

use axum::{extract::State, Json};

use super::{ApiResult, AppJson};
use crate::models::{StatusCheck, StatusCheckCreate};
use crate::AppState;

/// POST /api/status - Record a status check.
pub async fn create_status_check(
    State(state): State<AppState>,
    AppJson(request): AppJson<StatusCheckCreate>,
) -> ApiResult<StatusCheck> {
    let check = state.gateway.create(request).await?;
    Ok(Json(check))
}

/// GET /api/status - List status checks.
pub async fn list_status_checks(State(state): State<AppState>) -> ApiResult<Vec<StatusCheck>> {
    Ok(Json(state.gateway.list().await?))
}
