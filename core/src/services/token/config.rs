//! Configuration for the token service

use blog_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Value written to and expected in the `iss` claim
    pub issuer: String,
    /// HMAC signing secret
    pub secret: String,
}

impl TokenServiceConfig {
    pub fn new(issuer: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            secret: secret.into(),
        }
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        let jwt = JwtConfig::default();
        Self {
            issuer: jwt.issuer,
            secret: jwt.secret,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self::new(jwt.issuer.clone(), jwt.secret.clone())
    }
}
