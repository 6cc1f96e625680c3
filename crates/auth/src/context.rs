//! Authenticated request context

use crate::claims::SessionClaims;

/// Identity decoded from a valid session token
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub claims: SessionClaims,
}

impl AuthContext {
    pub fn new(claims: SessionClaims) -> Self {
        Self { claims }
    }

    pub fn email(&self) -> Option<&str> {
        self.claims.email()
    }

    /// Whether the session belongs to `email`.
    ///
    /// Both sides must be present: a token without an email owns nothing.
    pub fn owns(&self, email: Option<&str>) -> bool {
        match (self.email(), email) {
            (Some(own), Some(requested)) => own == requested,
            _ => false,
        }
    }
}
