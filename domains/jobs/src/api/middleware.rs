//! Jobs domain state and auth integration

use crate::JobsRepositories;
use axum::extract::FromRef;
use devheaven_auth::AuthConfig;

/// Application state for the Jobs domain
#[derive(Clone)]
pub struct JobsState {
    pub repos: JobsRepositories,
    pub auth: AuthConfig,
}

impl FromRef<JobsState> for AuthConfig {
    fn from_ref(state: &JobsState) -> Self {
        state.auth.clone()
    }
}
