//! Document store seam and its MongoDB implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{FindOneOptions, FindOptions};
use mongodb::{Collection, Database};

use crate::errors::AppError;

/// Name of the store's own per-document key, never returned to callers.
pub const INTERNAL_ID: &str = "_id";

/// Single-document operations against named collections.
///
/// Every read excludes [`INTERNAL_ID`] from the returned documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one new document.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), AppError>;

    /// Fetch up to `limit` documents in store-native order.
    async fn find_many(&self, collection: &str, limit: i64) -> Result<Vec<Document>, AppError>;

    /// Fetch the first document whose fields equal every field of `filter`.
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, AppError>;

    /// Replace the first document matching `filter`. Returns whether one matched.
    async fn replace_one(
        &self,
        collection: &str,
        filter: Document,
        replacement: Document,
    ) -> Result<bool, AppError>;
}

/// MongoDB implementation of the DocumentStore.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }
}

fn without_internal_id() -> Document {
    doc! { "_id": 0 }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), AppError> {
        self.collection(collection).insert_one(document).await?;
        Ok(())
    }

    async fn find_many(&self, collection: &str, limit: i64) -> Result<Vec<Document>, AppError> {
        let options = FindOptions::builder()
            .limit(limit)
            .projection(without_internal_id())
            .build();

        let cursor = self
            .collection(collection)
            .find(doc! {})
            .with_options(options)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, AppError> {
        let options = FindOneOptions::builder()
            .projection(without_internal_id())
            .build();

        Ok(self
            .collection(collection)
            .find_one(filter)
            .with_options(options)
            .await?)
    }

    async fn replace_one(
        &self,
        collection: &str,
        filter: Document,
        replacement: Document,
    ) -> Result<bool, AppError> {
        let result = self
            .collection(collection)
            .replace_one(filter, replacement)
            .await?;
        Ok(result.matched_count > 0)
    }
}
