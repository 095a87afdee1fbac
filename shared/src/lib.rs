//! Shared utilities and common types for the Inkwell blog server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Validation helpers (email, required fields)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment,
    DatabaseConfig, JwtConfig, ServerConfig, CorsConfig, LoggingConfig, LogFormat,
};
pub use errors::{ErrorResponse, error_codes};
pub use utils::validation;
