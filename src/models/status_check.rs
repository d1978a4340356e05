//! Status check model used by clients to record health pings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Creatable, Derived, Entity};
use super::validate::Validate;
use crate::errors::AppError;

/// A recorded status ping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    #[serde(with = "super::timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Request body for recording a status check.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

impl Validate for StatusCheckCreate {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

impl Entity for StatusCheck {
    const COLLECTION: &'static str = "status_checks";
    const KIND: &'static str = "Status check";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Creatable for StatusCheck {
    type Create = StatusCheckCreate;

    fn build(payload: StatusCheckCreate, derived: Derived) -> Self {
        Self {
            id: derived.id,
            client_name: payload.client_name,
            timestamp: derived.now,
        }
    }
}
