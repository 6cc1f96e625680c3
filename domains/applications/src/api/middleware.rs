//! Applications domain state and auth integration

use crate::ApplicationsRepositories;
use axum::extract::FromRef;
use devheaven_auth::AuthConfig;

/// Application state for the Applications domain
#[derive(Clone)]
pub struct ApplicationsState {
    pub repos: ApplicationsRepositories,
    pub auth: AuthConfig,
}

impl FromRef<ApplicationsState> for AuthConfig {
    fn from_ref(state: &ApplicationsState) -> Self {
        state.auth.clone()
    }
}
