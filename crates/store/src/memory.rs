//! In-memory document store
//!
//! Keeps every collection in insertion order behind an async lock.
//! Used by the integration tests and for local development without
//! a database (`STORE_PROVIDER=memory`).

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::query::{apply_set, with_identity, Document, FindOptions};
use crate::{
    Collection, DeleteResult, DocumentStore, InsertOneResult, StoreError, UpdateResult, ID_FIELD,
};

#[derive(Debug, Clone)]
struct StoredDocument {
    id: Uuid,
    document: Document,
}

/// In-memory document store. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<HashMap<Collection, Vec<StoredDocument>>>>,
}

impl MemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection
    pub async fn count(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .await
            .get(&collection)
            .map_or(0, Vec::len)
    }
}

/// Integer value of a stored counter; non-numbers count as 0
fn counter_value(value: &serde_json::Value) -> i64 {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|n| n.floor() as i64))
        .unwrap_or(0)
}

#[async_trait::async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find(
        &self,
        collection: Collection,
        options: &FindOptions,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let Some(stored) = collections.get(&collection) else {
            return Ok(Vec::new());
        };

        let mut matched: Vec<&StoredDocument> = stored
            .iter()
            .filter(|s| options.filter.matches(&s.document))
            .collect();

        // Stable sort keeps insertion order between equal keys
        if let Some(sort) = &options.sort {
            matched.sort_by(|a, b| sort.compare(&a.document, &b.document));
        }

        let limit = options
            .limit
            .map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));

        Ok(matched
            .into_iter()
            .take(limit)
            .map(|s| with_identity(s.id, s.document.clone()))
            .collect())
    }

    async fn find_one(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|stored| stored.iter().find(|s| s.id == id))
            .map(|s| with_identity(s.id, s.document.clone())))
    }

    async fn insert_one(
        &self,
        collection: Collection,
        mut document: Document,
    ) -> Result<InsertOneResult, StoreError> {
        document.remove(ID_FIELD);
        let id = Uuid::new_v4();

        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(StoredDocument { id, document });

        tracing::debug!(collection = %collection, id = %id, "Inserted document");
        Ok(InsertOneResult::new(id))
    }

    async fn update_one(
        &self,
        collection: Collection,
        id: Uuid,
        fields: Document,
    ) -> Result<UpdateResult, StoreError> {
        let mut collections = self.collections.write().await;
        let target = collections
            .get_mut(&collection)
            .and_then(|stored| stored.iter_mut().find(|s| s.id == id));

        Ok(match target {
            Some(stored) => {
                let modified = apply_set(&mut stored.document, fields);
                UpdateResult::new(true, modified)
            }
            None => UpdateResult::new(false, false),
        })
    }

    async fn increment(
        &self,
        collection: Collection,
        id: Uuid,
        field: &str,
        by: i64,
    ) -> Result<Option<i64>, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(stored) = collections
            .get_mut(&collection)
            .and_then(|stored| stored.iter_mut().find(|s| s.id == id))
        else {
            return Ok(None);
        };

        let current = stored.document.get(field).map_or(0, counter_value);
        let next = current + by;
        stored
            .document
            .insert(field.to_string(), serde_json::Value::from(next));
        Ok(Some(next))
    }

    async fn delete_one(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<DeleteResult, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(stored) = collections.get_mut(&collection) else {
            return Ok(DeleteResult::new(0));
        };

        let before = stored.len();
        stored.retain(|s| s.id != id);
        Ok(DeleteResult::new((before - stored.len()) as u64))
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}
