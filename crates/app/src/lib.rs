//! DevHeaven application composition root
//!
//! Composes the jobs, applications and sessions routers over one shared
//! document store into a single application.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use devheaven_applications::{ApplicationsRepositories, ApplicationsState};
use devheaven_auth::AuthConfig;
use devheaven_common::Config;
use devheaven_jobs::{JobsRepositories, JobsState};
use devheaven_sessions::SessionsState;
use devheaven_store::DocumentStore;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the main application router with all routes
pub fn create_app(config: &Config, store: Arc<dyn DocumentStore>) -> Router {
    let auth = AuthConfig::from(config);

    tracing::info!(
        store = store.provider_name(),
        environment = ?config.environment,
        "Composing application"
    );

    let jobs_state = JobsState {
        repos: JobsRepositories::new(store.clone()),
        auth: auth.clone(),
    };
    let applications_state = ApplicationsState {
        repos: ApplicationsRepositories::new(store),
        auth: auth.clone(),
    };
    let sessions_state = SessionsState { auth };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(devheaven_jobs::routes().with_state(jobs_state))
        .merge(devheaven_applications::routes().with_state(applications_state))
        .merge(devheaven_sessions::routes().with_state(sessions_state))
}

/// Credentialed CORS for an explicit origin allow-list.
///
/// Origins that are not valid header values are skipped.
pub fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(600))
}

/// Reject request bodies over [`MAX_BODY_BYTES`]
pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

async fn root() -> &'static str {
    "DevHeaven Server Is Running"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
