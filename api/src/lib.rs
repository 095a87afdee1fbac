//! HTTP layer for the Inkwell blog server
//!
//! Library exports are shared by the binary and the integration tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState};
