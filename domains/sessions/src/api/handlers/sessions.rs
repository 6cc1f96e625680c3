//! Session API handlers
//!
//! - POST /jwt - Sign the posted identity and set the session cookie
//! - POST /logout - Expire the session cookie

use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use devheaven_auth::{clear_session_cookie, issue_session_token, session_cookie, AuthError};
use devheaven_common::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::middleware::SessionsState;

/// Body of every session response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
}

impl SessionResponse {
    fn ok() -> Json<Self> {
        Json(Self { success: true })
    }
}

/// Issue a session for the posted identity
pub async fn issue_session(
    State(state): State<SessionsState>,
    jar: CookieJar,
    JsonObject(identity): JsonObject,
) -> Result<(CookieJar, Json<SessionResponse>), AuthError> {
    let email = identity
        .get("email")
        .and_then(Value::as_str)
        .map(str::to_string);

    let token = issue_session_token(identity, &state.auth)?;

    tracing::info!(email = email.as_deref().unwrap_or_default(), "Session issued");
    Ok((jar.add(session_cookie(token, &state.auth)), SessionResponse::ok()))
}

/// Clear the session cookie. Succeeds whether or not a session existed.
pub async fn clear_session(
    State(state): State<SessionsState>,
    jar: CookieJar,
) -> (CookieJar, Json<SessionResponse>) {
    // `jar.remove` only emits a header for cookies sent with the request
    (jar.add(clear_session_cookie(&state.auth)), SessionResponse::ok())
}
