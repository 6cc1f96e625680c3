//! Route definitions for Sessions domain API

use axum::{routing::post, Router};

use super::handlers::sessions;
use super::middleware::SessionsState;

/// Create all Sessions domain API routes
pub fn routes() -> Router<SessionsState> {
    Router::new()
        .route("/jwt", post(sessions::issue_session))
        .route("/logout", post(sessions::clear_session))
}
