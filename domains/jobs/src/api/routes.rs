//! Route definitions for Jobs domain API

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::jobs;
use super::middleware::JobsState;

/// Create all Jobs domain API routes
pub fn routes() -> Router<JobsState> {
    Router::new()
        .route("/jobs", get(jobs::list_jobs))
        .route("/details/{id}", get(jobs::get_job))
        .route("/newJob", post(jobs::create_job))
        .route("/updateMyPost/{id}", patch(jobs::update_job))
        .route("/myPostedJob/{id}", delete(jobs::delete_job))
}
