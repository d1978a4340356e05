//! Document store gateway.
//!
//! Validates payloads, derives server-owned fields, and performs exactly one store
//! operation per call (two for a singleton's first read). Holds no mutable state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mongodb::bson::{self, doc, Document};

use crate::db::{DocumentStore, INTERNAL_ID};
use crate::errors::AppError;
use crate::models::validate::Validate;
use crate::models::{Creatable, Derived, Entity, Singleton, Updatable};

/// Maximum number of documents returned by a list call.
pub const LIST_CAP: i64 = 1000;

/// Source of fresh document ids.
pub type IdSource = Arc<dyn Fn() -> String + Send + Sync>;
/// Source of the current instant.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Random UUID v4 in hyphenated form.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

#[derive(Clone)]
pub struct Gateway {
    store: Arc<dyn DocumentStore>,
    ids: IdSource,
    clock: Clock,
}

impl Gateway {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            ids: Arc::new(new_id),
            clock: Arc::new(now_utc),
        }
    }

    #[cfg(test)]
    pub fn with_id_source(mut self, ids: IdSource) -> Self {
        self.ids = ids;
        self
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn derive(&self) -> Derived {
        Derived {
            id: (self.ids)(),
            now: (self.clock)(),
        }
    }

    /// Validate a payload, build the full entity, and insert it.
    pub async fn create<E: Creatable>(&self, payload: E::Create) -> Result<E, AppError> {
        payload.validate()?;

        let entity = E::build(payload, self.derive());
        self.store
            .insert_one(E::COLLECTION, to_document(&entity)?)
            .await?;

        tracing::info!(kind = E::KIND, id = entity.id(), "Created document");
        Ok(entity)
    }

    /// Up to [`LIST_CAP`] entities in store order.
    pub async fn list<E: Entity>(&self) -> Result<Vec<E>, AppError> {
        self.store
            .find_many(E::COLLECTION, LIST_CAP)
            .await?
            .into_iter()
            .map(from_document::<E>)
            .collect()
    }

    /// Fetch one entity by id.
    pub async fn get<E: Entity>(&self, id: &str) -> Result<E, AppError> {
        self.store
            .find_one(E::COLLECTION, doc! { "id": id })
            .await?
            .map(from_document::<E>)
            .transpose()?
            .ok_or_else(|| not_found::<E>(id))
    }

    /// Merge the present fields of `update` into the stored entity.
    pub async fn update<E: Updatable>(&self, id: &str, update: E::Update) -> Result<E, AppError> {
        update.validate()?;

        let mut entity: E = self.get(id).await?;
        entity.merge(update);
        self.replace(&entity).await?;

        tracing::info!(kind = E::KIND, id, "Updated document");
        Ok(entity)
    }

    /// The singleton entity, created from defaults if the collection is empty.
    pub async fn get_singleton<E: Singleton>(&self) -> Result<E, AppError> {
        if let Some(document) = self.store.find_one(E::COLLECTION, doc! {}).await? {
            return from_document(document);
        }

        let entity = E::with_defaults((self.ids)());
        self.store
            .insert_one(E::COLLECTION, to_document(&entity)?)
            .await?;

        tracing::info!(kind = E::KIND, id = entity.id(), "Initialized singleton from defaults");
        Ok(entity)
    }

    /// Merge the present fields of `update` into the singleton.
    pub async fn update_singleton<E: Singleton>(&self, update: E::Update) -> Result<E, AppError> {
        update.validate()?;

        let mut entity: E = self.get_singleton().await?;
        entity.merge(update);
        self.replace(&entity).await?;

        tracing::info!(kind = E::KIND, id = entity.id(), "Updated singleton");
        Ok(entity)
    }

    async fn replace<E: Entity>(&self, entity: &E) -> Result<(), AppError> {
        let matched = self
            .store
            .replace_one(E::COLLECTION, doc! { "id": entity.id() }, to_document(entity)?)
            .await?;

        if matched {
            Ok(())
        } else {
            Err(not_found::<E>(entity.id()))
        }
    }
}

fn not_found<E: Entity>(id: &str) -> AppError {
    AppError::NotFound(format!("{} {} not found", E::KIND, id))
}

fn to_document<E: Entity>(entity: &E) -> Result<Document, AppError> {
    Ok(bson::to_document(entity)?)
}

fn from_document<E: Entity>(mut document: Document) -> Result<E, AppError> {
    document.remove(INTERNAL_ID);
    Ok(bson::from_document(document)?)
}

#[cfg(test)]
mod tests;
