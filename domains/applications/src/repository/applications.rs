//! Application repository

use devheaven_common::Result;
use devheaven_store::{
    Collection, DeleteResult, Document, DocumentStore, Filter, FindOptions, InsertOneResult,
    UpdateResult,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{EMAIL_FIELD, JOB_ID_FIELD};

#[derive(Clone)]
pub struct ApplicationRepository {
    store: Arc<dyn DocumentStore>,
}

impl ApplicationRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All applications submitted by a candidate
    pub async fn list_by_candidate(&self, email: &str) -> Result<Vec<Document>> {
        let options = FindOptions::new(Filter::new().eq(EMAIL_FIELD, email));
        Ok(self.store.find(Collection::Applications, &options).await?)
    }

    /// All applications for a job posting, matched on the stored `jobId` string
    pub async fn list_by_job(&self, job_id: &str) -> Result<Vec<Document>> {
        let options = FindOptions::new(Filter::new().eq(JOB_ID_FIELD, job_id));
        Ok(self.store.find(Collection::Applications, &options).await?)
    }

    /// Find application by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Document>> {
        Ok(self.store.find_one(Collection::Applications, id).await?)
    }

    /// Store a new application as submitted
    pub async fn create(&self, application: Document) -> Result<InsertOneResult> {
        Ok(self
            .store
            .insert_one(Collection::Applications, application)
            .await?)
    }

    /// Overwrite the given fields of an application
    pub async fn update(&self, id: Uuid, fields: Document) -> Result<UpdateResult> {
        Ok(self
            .store
            .update_one(Collection::Applications, id, fields)
            .await?)
    }

    /// Delete an application
    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult> {
        Ok(self.store.delete_one(Collection::Applications, id).await?)
    }
}
