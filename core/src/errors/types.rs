//! Domain-specific error types for authentication, tokens and validation

use blog_shared::error_codes;
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found: {email}")]
    UserNotFound { email: String },

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::UserNotFound { .. } => error_codes::USER_NOT_FOUND,
            AuthError::UserAlreadyExists => error_codes::USER_ALREADY_EXISTS,
            AuthError::AuthenticationFailed => error_codes::AUTHENTICATION_FAILED,
            AuthError::InsufficientPermissions => "INSUFFICIENT_PERMISSIONS",
        }
    }
}

/// Token-related errors
///
/// These are the typed reasons behind a failed verification. The boolean
/// validity check collapses all of them to `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },
}

impl TokenError {
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
            TokenError::InvalidTokenFormat => "INVALID_TOKEN_FORMAT",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
            TokenError::MissingClaim { .. } => "MISSING_CLAIM",
        }
    }
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid length for field: {field} (min: {min}, max: {max})")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::InvalidEmail => "INVALID_EMAIL",
            ValidationError::InvalidLength { .. } => "INVALID_LENGTH",
        }
    }
}
