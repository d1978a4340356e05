//! Contact form API endpoints.

use axum::{extract::State, Json};

use super::{ApiResult, AppJson};
use crate::models::{Contact, ContactCreate};
use crate::AppState;

/// POST /api/contact - Store a contact form submission and notify the owner.
pub async fn create_contact(
    State(state): State<AppState>,
    AppJson(request): AppJson<ContactCreate>,
) -> ApiResult<Contact> {
    let contact: Contact = state.gateway.create(request).await?;

    if let Some(notifier) = &state.notifier {
        if let Err(e) = notifier.notify(&contact).await {
            tracing::warn!("Failed to send contact notification for {}: {}", contact.id, e);
        }
    }

    Ok(Json(contact))
}

/// GET /api/contact - List contact submissions.
pub async fn list_contacts(State(state): State<AppState>) -> ApiResult<Vec<Contact>> {
    Ok(Json(state.gateway.list().await?))
}
