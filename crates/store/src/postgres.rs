//! Postgres document store
//!
//! Every collection lives in the single `documents` table as JSONB rows
//! keyed by `(collection, id)`; `seq` records insertion order. Filters
//! compile to parameterised JSONB path expressions built with
//! `sqlx::QueryBuilder`, so no user input is ever spliced into SQL.

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::types::Json;
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::query::{apply_set, with_identity, Condition, Document, FieldPath, FindOptions};
use crate::{
    Collection, DeleteResult, DocumentStore, InsertOneResult, SortDirection, StoreError,
    UpdateResult, ID_FIELD,
};

/// Maximum pooled connections per process
const MAX_CONNECTIONS: u32 = 10;

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    doc: Json<Document>,
}

/// Postgres-backed document store
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a store whose pool connects on first use
    pub fn connect_lazy(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_lazy(database_url)?;
        Ok(Self::new(pool))
    }

    /// Apply the embedded migrations
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        tracing::info!("Document store migrations applied");
        Ok(())
    }
}

fn path_array(path: &FieldPath) -> Vec<String> {
    path.segments().to_vec()
}

/// `SELECT` for a find, with filter, sort and limit applied.
/// Insertion order (`seq`) breaks ties and is the default order.
pub(crate) fn build_find_query(
    collection: Collection,
    options: &FindOptions,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT id, doc FROM documents WHERE collection = ");
    qb.push_bind(collection.as_str());

    for condition in options.filter.conditions() {
        qb.push(" AND ");
        push_condition(&mut qb, condition);
    }

    qb.push(" ORDER BY ");
    if let Some(sort) = &options.sort {
        qb.push("doc #> ");
        qb.push_bind(path_array(&sort.path));
        qb.push(match sort.direction {
            SortDirection::Ascending => " ASC NULLS FIRST, ",
            SortDirection::Descending => " DESC NULLS LAST, ",
        });
    }
    qb.push("seq ASC");

    if let Some(limit) = options.limit {
        qb.push(" LIMIT ");
        qb.push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
    }

    qb
}

fn push_condition(qb: &mut QueryBuilder<'static, Postgres>, condition: &Condition) {
    match condition {
        Condition::Eq { path, value } => {
            qb.push("doc #> ");
            qb.push_bind(path_array(path));
            qb.push(" = ");
            qb.push_bind(Json(value.clone()));
        }
        Condition::ContainsIgnoreCase { path, needle } => {
            qb.push("(jsonb_typeof(doc #> ");
            qb.push_bind(path_array(path));
            qb.push(") = 'string' AND strpos(lower(doc #>> ");
            qb.push_bind(path_array(path));
            qb.push("), lower(");
            qb.push_bind(needle.clone());
            qb.push(")) > 0)");
        }
        Condition::Gte { path, bound } => push_numeric_bound(qb, path, ">=", *bound),
        Condition::Lte { path, bound } => push_numeric_bound(qb, path, "<=", *bound),
    }
}

/// Numeric comparison guarded so non-number values never reach the cast
fn push_numeric_bound(
    qb: &mut QueryBuilder<'static, Postgres>,
    path: &FieldPath,
    operator: &'static str,
    bound: f64,
) {
    qb.push("(CASE WHEN jsonb_typeof(doc #> ");
    qb.push_bind(path_array(path));
    qb.push(") = 'number' THEN (doc #> ");
    qb.push_bind(path_array(path));
    qb.push(")::float8 ");
    qb.push(operator);
    qb.push(" ");
    qb.push_bind(bound);
    qb.push(" ELSE FALSE END)");
}

#[async_trait::async_trait]
impl DocumentStore for PgDocumentStore {
    async fn find(
        &self,
        collection: Collection,
        options: &FindOptions,
    ) -> Result<Vec<Document>, StoreError> {
        let rows: Vec<DocumentRow> = build_find_query(collection, options)
            .build_query_as()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| with_identity(row.id, row.doc.0))
            .collect())
    }

    async fn find_one(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, StoreError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, doc FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| with_identity(row.id, row.doc.0)))
    }

    async fn insert_one(
        &self,
        collection: Collection,
        mut document: Document,
    ) -> Result<InsertOneResult, StoreError> {
        document.remove(ID_FIELD);
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO documents (collection, id, doc) VALUES ($1, $2, $3)")
            .bind(collection.as_str())
            .bind(id)
            .bind(Json(&document))
            .execute(&self.pool)
            .await?;

        tracing::debug!(collection = %collection, id = %id, "Inserted document");
        Ok(InsertOneResult::new(id))
    }

    async fn update_one(
        &self,
        collection: Collection,
        id: Uuid,
        fields: Document,
    ) -> Result<UpdateResult, StoreError> {
        let mut tx = self.pool.begin().await?;

        let current: Option<Json<Document>> = sqlx::query_scalar(
            "SELECT doc FROM documents WHERE collection = $1 AND id = $2 FOR UPDATE",
        )
        .bind(collection.as_str())
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        // Dropping the transaction rolls it back
        let Some(Json(mut document)) = current else {
            return Ok(UpdateResult::new(false, false));
        };

        let modified = apply_set(&mut document, fields);
        if modified {
            sqlx::query("UPDATE documents SET doc = $3 WHERE collection = $1 AND id = $2")
                .bind(collection.as_str())
                .bind(id)
                .bind(Json(&document))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(UpdateResult::new(true, modified))
    }

    async fn increment(
        &self,
        collection: Collection,
        id: Uuid,
        field: &str,
        by: i64,
    ) -> Result<Option<i64>, StoreError> {
        let next = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE documents
            SET doc = jsonb_set(
                doc,
                ARRAY[$3::text],
                to_jsonb(
                    CASE WHEN jsonb_typeof(doc -> $3::text) = 'number'
                        THEN floor((doc ->> $3::text)::numeric)::bigint
                        ELSE 0
                    END + $4::bigint
                )
            )
            WHERE collection = $1 AND id = $2
            RETURNING (doc ->> $3::text)::bigint
            "#,
        )
        .bind(collection.as_str())
        .bind(id)
        .bind(field)
        .bind(by)
        .fetch_optional(&self.pool)
        .await?;

        Ok(next)
    }

    async fn delete_one(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<DeleteResult, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(DeleteResult::new(result.rows_affected()))
    }

    fn provider_name(&self) -> &'static str {
        "postgres"
    }
}
