//! Session token claims

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims carried by a session token.
///
/// The identity payload posted at login is kept verbatim next to the
/// registered `iat`/`exp` claims; `email` is the only field the API reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
    /// Identity payload supplied by the client
    #[serde(flatten)]
    pub identity: Map<String, Value>,
}

impl SessionClaims {
    /// Email asserted by the token, if the identity carried one as a string
    pub fn email(&self) -> Option<&str> {
        self.identity.get("email").and_then(Value::as_str)
    }
}
