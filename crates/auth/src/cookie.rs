//! Session cookie construction

use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::config::AuthConfig;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "token";

/// HTTP-only cookie carrying a session token.
///
/// Production deployments serve the frontend from another site, so the
/// cookie must be `Secure; SameSite=None` there; elsewhere it is `Strict`.
pub fn session_cookie(token: String, config: &AuthConfig) -> Cookie<'static> {
    let production = config.environment.is_production();

    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(production)
        .same_site(if production {
            SameSite::None
        } else {
            SameSite::Strict
        })
        .build()
}

/// Expired, empty session cookie with the same attributes as
/// [`session_cookie`], so browsers drop the stored one
pub fn clear_session_cookie(config: &AuthConfig) -> Cookie<'static> {
    let mut cookie = session_cookie(String::new(), config);
    cookie.make_removal();
    cookie
}
