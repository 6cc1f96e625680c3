//! Route definitions for Applications domain API

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::applications;
use super::middleware::ApplicationsState;

/// Candidate-facing routes
fn candidate_routes() -> Router<ApplicationsState> {
    Router::new()
        .route("/myApplications", get(applications::list_my_applications))
        .route("/application/{id}", get(applications::get_application))
        .route("/applyJobs", post(applications::apply_to_job))
        .route(
            "/updateApplication/{id}",
            patch(applications::update_application),
        )
        .route(
            "/delete-application/{id}",
            delete(applications::delete_application),
        )
}

/// Recruiter-facing routes
fn recruiter_routes() -> Router<ApplicationsState> {
    Router::new()
        .route(
            "/view-candidate/jobs/{job_id}",
            get(applications::list_job_candidates),
        )
        .route(
            "/review-application/{id}",
            patch(applications::review_application),
        )
}

/// Create all Applications domain API routes
pub fn routes() -> Router<ApplicationsState> {
    Router::new()
        .merge(candidate_routes())
        .merge(recruiter_routes())
}
