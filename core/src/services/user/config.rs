//! Configuration for the user service

use blog_shared::config::JwtConfig;

/// Configuration for the user service
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Lifetime of tokens issued at login, in seconds
    pub access_token_expiry_seconds: i64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Minimum accepted password length
    pub min_password_length: usize,
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            access_token_expiry_seconds: JwtConfig::default().access_token_expiry,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            min_password_length: 4,
        }
    }
}

impl UserServiceConfig {
    /// Derive from the JWT settings, keeping the default hashing cost
    pub fn from_jwt(jwt: &JwtConfig) -> Self {
        Self {
            access_token_expiry_seconds: jwt.access_token_expiry,
            ..Default::default()
        }
    }
}
