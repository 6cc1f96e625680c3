//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthConfig: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::cookie::SESSION_COOKIE;
use crate::error::AuthError;
use crate::jwt::validate_session_token;

/// Session-authenticated user extractor.
///
/// Reads the `token` cookie and rejects the request with 401 before the
/// handler runs when it is missing, empty, forged or expired.
#[derive(Debug)]
pub struct AuthUser(pub AuthContext);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let config = AuthConfig::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value())
            .filter(|value| !value.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = validate_session_token(token, &config)?;

        Ok(AuthUser(AuthContext::new(claims)))
    }
}
