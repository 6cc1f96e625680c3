//! Session token signing and validation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Session lifetime: one day
pub const SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// Sign an identity payload into a session token valid for one day.
///
/// Registered `iat`/`exp` claims in the payload are replaced.
pub fn issue_session_token(
    mut identity: Map<String, Value>,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    identity.remove("iat");
    identity.remove("exp");

    let now = chrono::Utc::now().timestamp().max(0) as u64;
    let claims = SessionClaims {
        iat: now,
        exp: now + SESSION_TTL_SECS,
        identity,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign session token");
        AuthError::TokenCreation
    })
}

/// Validate a session token's signature and expiry
pub fn validate_session_token(
    token: &str,
    config: &AuthConfig,
) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Identity payloads are client-defined and may carry an `aud`
    validation.validate_aud = false;

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Session token validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}
