//! Job application API handlers
//!
//! Candidate operations:
//! - GET /myApplications?email= - Own applications (session email must match)
//! - GET /application/{id} - Single application, `null` when absent
//! - POST /applyJobs - Apply and bump the posting's `applyCount`
//! - PATCH /updateApplication/{id} - Overwrite whitelisted fields
//! - DELETE /delete-application/{id} - Withdraw an application
//!
//! Recruiter operations:
//! - GET /view-candidate/jobs/{job_id} - Applications for a posting
//! - PATCH /review-application/{id} - Set the review status

use axum::{
    extract::{Path, Query, State},
    Json,
};
use devheaven_auth::AuthUser;
use devheaven_common::{Error, JsonObject, Result};
use devheaven_store::{DeleteResult, Document, InsertOneResult, UpdateResult};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::middleware::ApplicationsState;
use crate::domain::entities::{application_review, application_update, referenced_job};

/// Query parameters for listing a candidate's applications
#[derive(Debug, Deserialize)]
pub struct MyApplicationsParams {
    pub email: Option<String>,
}

/// List the applications of the signed-in candidate
pub async fn list_my_applications(
    AuthUser(ctx): AuthUser,
    State(state): State<ApplicationsState>,
    Query(params): Query<MyApplicationsParams>,
) -> Result<Json<Vec<Document>>> {
    let email = match params.email.as_deref() {
        Some(email) if ctx.owns(Some(email)) => email,
        requested => {
            tracing::debug!(
                requested = requested.unwrap_or_default(),
                "Session does not own requested applications"
            );
            return Err(Error::Authorization("Forbidden".to_string()));
        }
    };

    let applications = state.repos.applications.list_by_candidate(email).await?;
    Ok(Json(applications))
}

/// Get a single application
pub async fn get_application(
    AuthUser(_ctx): AuthUser,
    State(state): State<ApplicationsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Document>>> {
    let application = state.repos.applications.find(id).await?;
    Ok(Json(application))
}

/// List every application for a job posting
pub async fn list_job_candidates(
    AuthUser(_ctx): AuthUser,
    State(state): State<ApplicationsState>,
    Path(job_id): Path<String>,
) -> Result<Json<Vec<Document>>> {
    let applications = state.repos.applications.list_by_job(&job_id).await?;
    Ok(Json(applications))
}

/// Submit an application and count it against the posting.
///
/// The application is stored before the counter is touched. When `jobId`
/// names no posting the stored application is kept and 404 is returned.
pub async fn apply_to_job(
    AuthUser(ctx): AuthUser,
    State(state): State<ApplicationsState>,
    JsonObject(application): JsonObject,
) -> Result<Json<InsertOneResult>> {
    let job_id = referenced_job(&application);
    let result = state.repos.applications.create(application).await?;

    tracing::info!(
        application_id = %result.inserted_id,
        email = ctx.email().unwrap_or_default(),
        "Application submitted"
    );

    let apply_count = match job_id {
        Some(job_id) => state.repos.jobs.increment_apply_count(job_id).await?,
        None => None,
    };

    match (job_id, apply_count) {
        (Some(job_id), Some(apply_count)) => {
            tracing::info!(job_id = %job_id, apply_count, "Application counted");
            Ok(Json(result))
        }
        _ => {
            tracing::warn!(
                application_id = %result.inserted_id,
                job_id = ?job_id,
                "Application stored but references no existing job"
            );
            Err(Error::NotFound("Job not found".to_string()))
        }
    }
}

/// Overwrite an application's whitelisted fields
pub async fn update_application(
    AuthUser(ctx): AuthUser,
    State(state): State<ApplicationsState>,
    Path(id): Path<Uuid>,
    JsonObject(body): JsonObject,
) -> Result<Json<UpdateResult>> {
    let result = state
        .repos
        .applications
        .update(id, application_update(&body))
        .await?;

    tracing::info!(
        application_id = %id,
        email = ctx.email().unwrap_or_default(),
        matched = result.matched_count,
        modified = result.modified_count,
        "Application updated"
    );
    Ok(Json(result))
}

/// Set an application's review status
pub async fn review_application(
    AuthUser(ctx): AuthUser,
    State(state): State<ApplicationsState>,
    Path(id): Path<Uuid>,
    JsonObject(body): JsonObject,
) -> Result<Json<UpdateResult>> {
    let result = state
        .repos
        .applications
        .update(id, application_review(&body))
        .await?;

    tracing::info!(
        application_id = %id,
        reviewer = ctx.email().unwrap_or_default(),
        matched = result.matched_count,
        "Application reviewed"
    );
    Ok(Json(result))
}

/// Delete an application
pub async fn delete_application(
    AuthUser(ctx): AuthUser,
    State(state): State<ApplicationsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResult>> {
    let result = state.repos.applications.delete(id).await?;

    tracing::info!(
        application_id = %id,
        email = ctx.email().unwrap_or_default(),
        deleted = result.deleted_count,
        "Application deleted"
    );
    Ok(Json(result))
}
