//! Job posting API handlers
//!
//! - GET /jobs - Public listing with home/search/owner/salary filters
//! - GET /details/{id} - Single posting, `null` when absent
//! - POST /newJob - Create a posting
//! - PATCH /updateMyPost/{id} - Overwrite whitelisted posting fields
//! - DELETE /myPostedJob/{id} - Delete a posting

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::Query;
use devheaven_auth::AuthUser;
use devheaven_common::{JsonObject, Result};
use devheaven_store::{DeleteResult, Document, InsertOneResult, UpdateResult};
use uuid::Uuid;

use crate::api::middleware::JobsState;
use crate::domain::entities::job_update;
use crate::domain::listing::{JobListQuery, ListJobsParams};

/// List job postings
pub async fn list_jobs(
    State(state): State<JobsState>,
    Query(params): Query<ListJobsParams>,
) -> Result<Json<Vec<Document>>> {
    let query = JobListQuery::from(&params);
    tracing::debug!(?query, "Listing jobs");

    let jobs = state.repos.jobs.list(&query.into_find_options()).await?;
    Ok(Json(jobs))
}

/// Get a single job posting
pub async fn get_job(
    AuthUser(_ctx): AuthUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Document>>> {
    let job = state.repos.jobs.find(id).await?;
    Ok(Json(job))
}

/// Create a job posting from the submitted document
pub async fn create_job(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    JsonObject(job): JsonObject,
) -> Result<Json<InsertOneResult>> {
    let result = state.repos.jobs.create(job).await?;

    tracing::info!(
        job_id = %result.inserted_id,
        email = ctx.email().unwrap_or_default(),
        "Job posted"
    );
    Ok(Json(result))
}

/// Overwrite a posting's whitelisted fields
pub async fn update_job(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
    JsonObject(body): JsonObject,
) -> Result<Json<UpdateResult>> {
    let result = state.repos.jobs.update(id, job_update(&body)).await?;

    tracing::info!(
        job_id = %id,
        email = ctx.email().unwrap_or_default(),
        matched = result.matched_count,
        modified = result.modified_count,
        "Job updated"
    );
    Ok(Json(result))
}

/// Delete a posting
pub async fn delete_job(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResult>> {
    let result = state.repos.jobs.delete(id).await?;

    tracing::info!(
        job_id = %id,
        email = ctx.email().unwrap_or_default(),
        deleted = result.deleted_count,
        "Job deleted"
    );
    Ok(Json(result))
}
