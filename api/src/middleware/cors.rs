//! CORS middleware configuration for cross-origin requests.
//!
//! Development accepts any origin so a local front end can talk to the API.
//! Other environments only accept the origins listed in `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use blog_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance for the given environment.
pub fn create_cors(environment: Environment, config: &CorsConfig) -> Cors {
    if environment.is_development() {
        create_development_cors(config)
    } else {
        create_restricted_cors(config)
    }
}

fn base_cors(config: &CorsConfig) -> Cors {
    Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age)
}

fn create_development_cors(config: &CorsConfig) -> Cors {
    tracing::info!("Configuring CORS for development environment");
    base_cors(config).allow_any_origin()
}

fn create_restricted_cors(config: &CorsConfig) -> Cors {
    tracing::info!(
        origins = config.allowed_origins.len(),
        "Configuring restricted CORS"
    );

    config
        .allowed_origins
        .iter()
        .fold(base_cors(config), |cors, origin| cors.allowed_origin(origin))
}
