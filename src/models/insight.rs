//! Insight (article) model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Creatable, Derived, Entity, Updatable};
use super::patch::Patch;
use super::validate::Validate;
use crate::errors::AppError;

pub const DEFAULT_READ_TIME: &str = "5 min read";

/// A published market insight. Hidden by clearing `is_published`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub content: Option<String>,
    pub category: String,
    /// Display date, e.g. "October 16, 2026"
    pub date: String,
    #[serde(default = "default_read_time")]
    pub read_time: String,
    #[serde(default = "default_published")]
    pub is_published: bool,
}

fn default_read_time() -> String {
    DEFAULT_READ_TIME.to_string()
}

fn default_published() -> bool {
    true
}

/// Human-readable date stamped on new insights.
pub fn display_date(now: &DateTime<Utc>) -> String {
    now.format("%B %d, %Y").to_string()
}

/// Request body for creating an insight.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightCreate {
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub content: Option<String>,
    pub category: String,
    #[serde(default = "default_read_time")]
    pub read_time: String,
}

impl Validate for InsightCreate {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Partial update of an insight.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightUpdate {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub excerpt: Patch<String>,
    #[serde(default)]
    pub content: Patch<String>,
    #[serde(default)]
    pub category: Patch<String>,
    #[serde(default)]
    pub read_time: Patch<String>,
    #[serde(default)]
    pub is_published: Patch<bool>,
}

impl Validate for InsightUpdate {
    fn validate(&self) -> Result<(), AppError> {
        self.title.reject_null("title")?;
        self.excerpt.reject_null("excerpt")?;
        self.category.reject_null("category")?;
        self.read_time.reject_null("readTime")?;
        self.is_published.reject_null("isPublished")
    }
}

impl Entity for Insight {
    const COLLECTION: &'static str = "insights";
    const KIND: &'static str = "Insight";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Creatable for Insight {
    type Create = InsightCreate;

    fn build(payload: InsightCreate, derived: Derived) -> Self {
        Self {
            id: derived.id,
            title: payload.title,
            excerpt: payload.excerpt,
            content: payload.content,
            category: payload.category,
            date: display_date(&derived.now),
            read_time: payload.read_time,
            is_published: true,
        }
    }
}

impl Updatable for Insight {
    type Update = InsightUpdate;

    fn merge(&mut self, update: InsightUpdate) {
        update.title.merge_into(&mut self.title);
        update.excerpt.merge_into(&mut self.excerpt);
        update.content.merge_into_option(&mut self.content);
        update.category.merge_into(&mut self.category);
        update.read_time.merge_into(&mut self.read_time);
        update.is_published.merge_into(&mut self.is_published);
    }
}
