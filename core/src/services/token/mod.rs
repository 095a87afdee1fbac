//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - HS256 access token issuance
//! - Signature and expiry verification
//! - Decoding the authenticated principal and user id

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
