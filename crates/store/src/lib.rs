//! DevHeaven Document Store
//!
//! Schemaless JSON document collections behind a single async trait:
//! - Postgres JSONB backend for deployed environments
//! - In-memory backend for tests and local development
//! - A small filter/sort model both backends evaluate identically

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod memory;
pub mod postgres;
pub mod query;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;
pub use query::{
    select_fields, Condition, Document, FieldPath, Filter, FindOptions, Sort, SortDirection,
};

/// Key under which a document's identity is exposed to callers
pub const ID_FIELD: &str = "_id";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store configuration error: {0}")]
    Configuration(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StoreError> for devheaven_common::Error {
    fn from(err: StoreError) -> Self {
        devheaven_common::Error::Store(err.to_string())
    }
}

/// Named document collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Jobs,
    Applications,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jobs => "jobs",
            Self::Applications => "applyJobs",
        }
    }
}

impl std::fmt::Display for Collection {
    #[mutants::skip] // Delegates to as_str()
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResult {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

impl InsertOneResult {
    pub fn new(inserted_id: Uuid) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Outcome of a field update.
///
/// `modified_count` is 0 when the document matched but every written
/// field already held the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<Uuid>,
    pub upserted_count: u64,
}

impl UpdateResult {
    pub fn new(matched: bool, modified: bool) -> Self {
        Self {
            acknowledged: true,
            matched_count: matched as u64,
            modified_count: modified as u64,
            upserted_id: None,
            upserted_count: 0,
        }
    }
}

/// Outcome of a delete; a missing document yields `deleted_count == 0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

/// Document store trait for different implementations
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Documents matching `options.filter`, in sort order (insertion order
    /// when unsorted), truncated to `options.limit`
    async fn find(
        &self,
        collection: Collection,
        options: &FindOptions,
    ) -> Result<Vec<Document>, StoreError>;

    /// Single document by identity
    async fn find_one(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, StoreError>;

    /// Insert a document as-is; the store assigns its identity and ignores
    /// any client-supplied `_id`
    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<InsertOneResult, StoreError>;

    /// Write each of `fields` onto the document (`$set` semantics); other
    /// fields are left untouched
    async fn update_one(
        &self,
        collection: Collection,
        id: Uuid,
        fields: Document,
    ) -> Result<UpdateResult, StoreError>;

    /// Atomically add `by` to a counter field.
    ///
    /// A fractional number is floored first; an absent or non-numeric
    /// field counts as 0. The field always holds an integer afterwards.
    ///
    /// Returns the new value, or `None` when no document matched.
    async fn increment(
        &self,
        collection: Collection,
        id: Uuid,
        field: &str,
        by: i64,
    ) -> Result<Option<i64>, StoreError>;

    /// Delete a document by identity
    async fn delete_one(&self, collection: Collection, id: Uuid)
        -> Result<DeleteResult, StoreError>;

    /// Backend name, for logging
    fn provider_name(&self) -> &'static str;
}

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub provider: devheaven_common::StoreProvider,
    pub database_url: Option<String>,
    /// Run embedded migrations on startup (Postgres only)
    pub run_migrations: bool,
}

impl From<&devheaven_common::Config> for StoreConfig {
    fn from(config: &devheaven_common::Config) -> Self {
        Self {
            provider: config.store_provider,
            database_url: config.database_url.clone(),
            run_migrations: true,
        }
    }
}

/// Document store factory
pub struct StoreServiceFactory;

impl StoreServiceFactory {
    /// Create a document store based on configuration
    pub async fn create(config: StoreConfig) -> Result<Box<dyn DocumentStore>, StoreError> {
        match config.provider {
            devheaven_common::StoreProvider::Postgres => {
                let url = config.database_url.as_deref().ok_or_else(|| {
                    StoreError::Configuration(
                        "DATABASE_URL is required for the postgres store".to_string(),
                    )
                })?;
                tracing::info!("Creating Postgres document store");
                let store = PgDocumentStore::connect_lazy(url)?;
                if config.run_migrations {
                    store.migrate().await?;
                }
                Ok(Box::new(store))
            }
            devheaven_common::StoreProvider::Memory => {
                tracing::info!("Creating in-memory document store");
                Ok(Box::new(MemoryDocumentStore::new()))
            }
        }
    }
}
