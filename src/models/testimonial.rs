//! Testimonial model.

use serde::{Deserialize, Serialize};

use super::entity::{Creatable, Derived, Entity, Updatable};
use super::patch::Patch;
use super::validate::{self, Validate};
use crate::errors::AppError;

/// A client testimonial. Deactivated rather than deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Request body for creating a testimonial.
#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialCreate {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: i32,
}

impl Validate for TestimonialCreate {
    fn validate(&self) -> Result<(), AppError> {
        validate::rating(self.rating)
    }
}

/// Partial update of a testimonial.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialUpdate {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub role: Patch<String>,
    #[serde(default)]
    pub content: Patch<String>,
    #[serde(default)]
    pub rating: Patch<i32>,
    #[serde(default)]
    pub is_active: Patch<bool>,
}

impl Validate for TestimonialUpdate {
    fn validate(&self) -> Result<(), AppError> {
        self.name.reject_null("name")?;
        self.role.reject_null("role")?;
        self.content.reject_null("content")?;
        self.rating.reject_null("rating")?;
        self.is_active.reject_null("isActive")?;
        if let Some(rating) = self.rating.as_value() {
            validate::rating(*rating)?;
        }
        Ok(())
    }
}

impl Entity for Testimonial {
    const COLLECTION: &'static str = "testimonials";
    const KIND: &'static str = "Testimonial";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Creatable for Testimonial {
    type Create = TestimonialCreate;

    fn build(payload: TestimonialCreate, derived: Derived) -> Self {
        Self {
            id: derived.id,
            name: payload.name,
            role: payload.role,
            content: payload.content,
            rating: payload.rating,
            is_active: true,
        }
    }
}

impl Updatable for Testimonial {
    type Update = TestimonialUpdate;

    fn merge(&mut self, update: TestimonialUpdate) {
        update.name.merge_into(&mut self.name);
        update.role.merge_into(&mut self.role);
        update.content.merge_into(&mut self.content);
        update.rating.merge_into(&mut self.rating);
        update.is_active.merge_into(&mut self.is_active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_rating_bounds() {
        let too_high: TestimonialUpdate = serde_json::from_value(json!({ "rating": 6 })).unwrap();
        assert!(too_high.validate().is_err());

        let fine: TestimonialUpdate = serde_json::from_value(json!({ "rating": 4 })).unwrap();
        assert!(fine.validate().is_ok());
    }

    #[test]
    fn test_client_cannot_choose_id() {
        let payload: TestimonialCreate = serde_json::from_value(json!({
            "id": "mine",
            "name": "Sam",
            "role": "Engineer",
            "content": "Great",
            "rating": 5
        }))
        .unwrap();
        let testimonial = Testimonial::build(
            payload,
            Derived {
                id: "server".into(),
                now: chrono::Utc::now(),
            },
        );
        assert_eq!(testimonial.id, "server");
        assert!(testimonial.is_active);
    }
}
