//! Shared fixtures for the API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use blog_api::AppState;
use blog_core::repositories::{MockArticleRepository, MockUserRepository};
use blog_core::services::{
    BlogService, TokenService, TokenServiceConfig, UserService, UserServiceConfig,
};
use serde_json::{json, Value};

pub const TEST_ISSUER: &str = "inkwell-test";
pub const TEST_SECRET: &str = "test-secret-key";
pub const TEST_PASSWORD: &str = "test-password";

pub type TestState = web::Data<AppState<MockUserRepository, MockArticleRepository>>;

pub fn test_state() -> TestState {
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::new(
        TEST_ISSUER,
        TEST_SECRET,
    )));
    let user_service = Arc::new(UserService::new(
        Arc::new(MockUserRepository::new()),
        Arc::clone(&token_service),
        UserServiceConfig {
            access_token_expiry_seconds: 3600,
            bcrypt_cost: 4,
            min_password_length: 4,
        },
    ));
    let blog_service = Arc::new(BlogService::new(Arc::new(MockArticleRepository::new())));

    web::Data::new(AppState::new(user_service, blog_service, token_service))
}

/// Sign a token with arbitrary claims using the test secret
pub fn sign_claims(claims: &Value, secret: &str) -> String {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn claims_for(id: i64, email: &str, exp: i64) -> Value {
    json!({
        "iss": TEST_ISSUER,
        "iat": chrono::Utc::now().timestamp(),
        "exp": exp,
        "sub": email,
        "id": id,
    })
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Register `email` and log in, evaluating to the access token
macro_rules! signup_and_login {
    ($app:expr, $email:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/api/user")
            .set_json(serde_json::json!({ "email": $email, "password": common::TEST_PASSWORD }))
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

        let req = actix_web::test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({ "email": $email, "password": common::TEST_PASSWORD }))
            .to_request();
        let body: serde_json::Value = actix_web::test::call_and_read_body_json(&$app, req).await;
        body["access_token"].as_str().unwrap().to_string()
    }};
}
