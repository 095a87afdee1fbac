//! Authentication configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "inkwell-development-secret-change-in-production";

/// JWT configuration
///
/// Issuer and secret are read once at startup and never rotated while the
/// process runs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret used to sign and verify tokens
    pub secret: String,

    /// Value of the `iss` claim
    pub issuer: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            issuer: String::from("inkwell"),
            access_token_expiry: 7200, // 2 hours
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the issuer claim
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Set access token expiry in hours
    pub fn with_access_expiry_hours(mut self, hours: i64) -> Self {
        self.access_token_expiry = hours * 3600;
        self
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let secret = std::env::var("JWT_SECRET_KEY").unwrap_or(defaults.secret);
        let issuer = std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer);
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.access_token_expiry);

        Self {
            secret,
            issuer,
            access_token_expiry,
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}
