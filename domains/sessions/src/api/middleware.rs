//! Sessions domain state

use axum::extract::FromRef;
use devheaven_auth::AuthConfig;

/// Application state for the Sessions domain
#[derive(Clone)]
pub struct SessionsState {
    pub auth: AuthConfig,
}

impl FromRef<SessionsState> for AuthConfig {
    fn from_ref(state: &SessionsState) -> Self {
        state.auth.clone()
    }
}
