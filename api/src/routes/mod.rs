//! Route handlers
//!
//! - `health`: liveness probe
//! - `auth`: signup and login
//! - `articles`: JSON article API
//! - `views`: view models backing the article pages

pub mod articles;
pub mod auth;
pub mod health;
pub mod views;

use actix_web::HttpResponse;
use blog_shared::{error_codes, ErrorResponse};

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
