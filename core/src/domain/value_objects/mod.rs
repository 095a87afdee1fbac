//! Value objects representing immutable domain concepts.

pub mod access_token;

// Re-export commonly used types
pub use access_token::AccessToken;
