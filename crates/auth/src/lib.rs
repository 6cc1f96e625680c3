//! Session authentication for the DevHeaven API
//!
//! Signs and validates cookie-carried session tokens and provides an axum
//! extractor that works with any domain state implementing `FromRef<S>`
//! for `AuthConfig`.

mod claims;
mod config;
mod context;
mod cookie;
mod error;
mod extractors;
mod jwt;

pub use claims::SessionClaims;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use cookie::{clear_session_cookie, session_cookie, SESSION_COOKIE};
pub use error::AuthError;
pub use extractors::AuthUser;
pub use jwt::{issue_session_token, validate_session_token, SESSION_TTL_SECS};
