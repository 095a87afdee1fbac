//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{AuthError, TokenError, ValidationError};

use blog_shared::error_codes;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Shorthand for a missing resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for an internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Auth(e) => e.error_code(),
            DomainError::Token(e) => e.error_code(),
            DomainError::ValidationErr(e) => e.error_code(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
