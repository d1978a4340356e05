//! REST API module.
//!
//! Contains all API routes and handlers following the site frontend contract.

mod contact;
mod insights;
mod performance;
mod profile;
mod status;
mod testimonials;

pub use contact::*;
pub use insights::*;
pub use performance::*;
pub use profile::*;
pub use status::*;
pub use testimonials::*;

use axum::extract::FromRequest;
use axum::Json;
use serde_json::{json, Value};

use crate::errors::AppError;

/// JSON body extractor whose rejections surface as validation errors.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Response type for every handler: the bare entity on success.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// GET /api/ - Greeting used as a reachability check.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}
