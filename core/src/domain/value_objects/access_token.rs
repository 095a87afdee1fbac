//! Access token value object returned by a successful login.

use serde::{Deserialize, Serialize};

/// Bearer token type reported to clients
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// A freshly issued access token together with its lifetime
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessToken {
    /// Signed, encoded token string
    pub access_token: String,

    /// Always `"Bearer"`
    pub token_type: String,

    /// Lifetime in seconds from issuance
    pub expires_in: i64,
}

impl AccessToken {
    /// Wraps an encoded token as a bearer credential
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in,
        }
    }
}
