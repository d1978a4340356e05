//! Testimonial API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{ApiResult, AppJson};
use crate::models::{Testimonial, TestimonialCreate, TestimonialUpdate};
use crate::AppState;

/// GET /api/testimonials - List all testimonials, active or not.
pub async fn list_testimonials(State(state): State<AppState>) -> ApiResult<Vec<Testimonial>> {
    Ok(Json(state.gateway.list().await?))
}

/// GET /api/testimonials/:id - Get a single testimonial.
pub async fn get_testimonial(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Testimonial> {
    Ok(Json(state.gateway.get(&id).await?))
}

/// POST /api/testimonials - Create a new testimonial.
pub async fn create_testimonial(
    State(state): State<AppState>,
    AppJson(request): AppJson<TestimonialCreate>,
) -> ApiResult<Testimonial> {
    Ok(Json(state.gateway.create(request).await?))
}

/// PUT /api/testimonials/:id - Update a testimonial.
pub async fn update_testimonial(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<TestimonialUpdate>,
) -> ApiResult<Testimonial> {
    Ok(Json(state.gateway.update(&id, request).await?))
}
