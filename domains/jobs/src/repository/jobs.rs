//! Job repository

use devheaven_common::Result;
use devheaven_store::{
    Collection, DeleteResult, Document, DocumentStore, FindOptions, InsertOneResult, UpdateResult,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::APPLY_COUNT_FIELD;

#[derive(Clone)]
pub struct JobRepository {
    store: Arc<dyn DocumentStore>,
}

impl JobRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// List jobs matching the given options
    pub async fn list(&self, options: &FindOptions) -> Result<Vec<Document>> {
        Ok(self.store.find(Collection::Jobs, options).await?)
    }

    /// Find job by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Document>> {
        Ok(self.store.find_one(Collection::Jobs, id).await?)
    }

    /// Store a new job posting as submitted
    pub async fn create(&self, job: Document) -> Result<InsertOneResult> {
        Ok(self.store.insert_one(Collection::Jobs, job).await?)
    }

    /// Overwrite the given fields of a posting
    pub async fn update(&self, id: Uuid, fields: Document) -> Result<UpdateResult> {
        Ok(self.store.update_one(Collection::Jobs, id, fields).await?)
    }

    /// Add one to a posting's application counter.
    ///
    /// Returns the new count, or `None` if the posting does not exist.
    pub async fn increment_apply_count(&self, id: Uuid) -> Result<Option<i64>> {
        Ok(self
            .store
            .increment(Collection::Jobs, id, APPLY_COUNT_FIELD, 1)
            .await?)
    }

    /// Delete a posting
    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult> {
        Ok(self.store.delete_one(Collection::Jobs, id).await?)
    }
}
