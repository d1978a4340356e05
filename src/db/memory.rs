//! In-process DocumentStore used by the test suite.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;

use super::store::{DocumentStore, INTERNAL_ID};
use crate::errors::AppError;

/// Collections kept in insertion order, each document tagged with its own `_id`
/// the way a real store would.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    offline: Mutex<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail as if the store were unreachable.
    pub fn go_offline(&self) {
        *self.offline.lock().unwrap() = true;
    }

    /// Raw stored documents, internal id included.
    pub fn raw(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn check_online(&self) -> Result<(), AppError> {
        if *self.offline.lock().unwrap() {
            Err(AppError::Store("Store error: connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key) == Some(value))
}

fn strip_internal_id(mut document: Document) -> Document {
    document.remove(INTERNAL_ID);
    document
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, collection: &str, mut document: Document) -> Result<(), AppError> {
        self.check_online()?;
        document.insert(INTERNAL_ID, ObjectId::new());
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(())
    }

    async fn find_many(&self, collection: &str, limit: i64) -> Result<Vec<Document>, AppError> {
        self.check_online()?;
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .raw(collection)
            .into_iter()
            .take(limit)
            .map(strip_internal_id)
            .collect())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, AppError> {
        self.check_online()?;
        Ok(self
            .raw(collection)
            .into_iter()
            .find(|document| matches(document, &filter))
            .map(strip_internal_id))
    }

    async fn replace_one(
        &self,
        collection: &str,
        filter: Document,
        replacement: Document,
    ) -> Result<bool, AppError> {
        self.check_online()?;
        let mut collections = self.collections.lock().unwrap();
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(false);
        };
        let Some(existing) = documents.iter_mut().find(|document| matches(document, &filter))
        else {
            return Ok(false);
        };

        let internal_id = existing.get(INTERNAL_ID).cloned();
        *existing = replacement;
        if let Some(internal_id) = internal_id {
            existing.insert(INTERNAL_ID, internal_id);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_reads_hide_internal_id() {
        let store = MemoryStore::new();
        store
            .insert_one("things", doc! { "id": "a", "n": 1 })
            .await
            .unwrap();

        assert!(store.raw("things")[0].contains_key(INTERNAL_ID));

        let listed = store.find_many("things", 10).await.unwrap();
        assert!(!listed[0].contains_key(INTERNAL_ID));

        let found = store
            .find_one("things", doc! { "id": "a" })
            .await
            .unwrap()
            .unwrap();
        assert!(!found.contains_key(INTERNAL_ID));
    }

    #[tokio::test]
    async fn test_replace_keeps_internal_id() {
        let store = MemoryStore::new();
        store
            .insert_one("things", doc! { "id": "a", "n": 1 })
            .await
            .unwrap();
        let before = store.raw("things")[0].get(INTERNAL_ID).cloned();

        let matched = store
            .replace_one("things", doc! { "id": "a" }, doc! { "id": "a", "n": 2 })
            .await
            .unwrap();
        assert!(matched);

        let after = store.raw("things");
        assert_eq!(after[0].get(INTERNAL_ID).cloned(), before);
        assert_eq!(after[0].get_i32("n").unwrap(), 2);

        let missed = store
            .replace_one("things", doc! { "id": "zzz" }, doc! { "id": "zzz" })
            .await
            .unwrap();
        assert!(!missed);
    }

    #[tokio::test]
    async fn test_limit_applies() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store
                .insert_one("things", doc! { "id": i.to_string() })
                .await
                .unwrap();
        }
        assert_eq!(store.find_many("things", 3).await.unwrap().len(), 3);
    }
}
