//! Traits tying each stored model to its collection and payload types.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use super::validate::Validate;

/// Server-owned values captured once per create.
#[derive(Debug, Clone)]
pub struct Derived {
    pub id: String,
    pub now: DateTime<Utc>,
}

/// A model stored as one document per value in a named collection.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection holding this kind.
    const COLLECTION: &'static str;
    /// Human-readable kind used in messages.
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// Kinds created from a client payload.
pub trait Creatable: Entity {
    type Create: DeserializeOwned + Validate + Send;

    fn build(payload: Self::Create, derived: Derived) -> Self;
}

/// Kinds that accept a field-level merge.
pub trait Updatable: Entity {
    type Update: DeserializeOwned + Validate + Send;

    /// Apply every present field of a validated update.
    fn merge(&mut self, update: Self::Update);
}

/// Kinds with one logical document per deployment, materialized from defaults on first read.
pub trait Singleton: Updatable {
    fn with_defaults(id: String) -> Self;
}
