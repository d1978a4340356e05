//! Contact form submission model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Creatable, Derived, Entity};
use super::validate::{self, Validate};
use crate::errors::AppError;

/// Status assigned to every fresh submission.
pub const STATUS_NEW: &str = "new";

/// A stored contact form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub investment_goal: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(with = "super::timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    STATUS_NEW.to_string()
}

/// Request body for a contact form submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCreate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub investment_goal: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Validate for ContactCreate {
    fn validate(&self) -> Result<(), AppError> {
        validate::email(&self.email)
    }
}

impl Entity for Contact {
    const COLLECTION: &'static str = "contacts";
    const KIND: &'static str = "Contact";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Creatable for Contact {
    type Create = ContactCreate;

    fn build(payload: ContactCreate, derived: Derived) -> Self {
        Self {
            id: derived.id,
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            investment_goal: payload.investment_goal,
            message: payload.message,
            timestamp: derived.now,
            status: default_status(),
        }
    }
}
