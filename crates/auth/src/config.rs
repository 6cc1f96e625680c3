//! Authentication configuration

use devheaven_common::{Config, Environment};

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Decides the session cookie's `Secure`/`SameSite` attributes
    pub environment: Environment,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>, environment: Environment) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            environment,
        }
    }
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        Self::new(config.jwt_secret.clone(), config.environment)
    }
}
