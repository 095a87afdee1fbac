//! User account service module
//!
//! This module provides:
//! - Signup with bcrypt password hashing
//! - Loading users by email or id
//! - Email/password login producing a bearer token

mod config;
mod password;
mod service;


pub use config::UserServiceConfig;
pub use service::UserService;
