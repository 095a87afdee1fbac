//! Integration tests for signup and login

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use blog_api::create_app;
use blog_shared::config::{CorsConfig, Environment};
use serde_json::{json, Value};

#[actix_web::test]
async fn test_signup_returns_created_user() {
    let app = test::init_service(create_app(
        common::test_state(),
        Environment::Development,
        &CorsConfig::default(),
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/user")
        .set_json(json!({ "email": "user@email.com", "password": "test-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["email"], "user@email.com");
    assert!(body.get("password_hash").is_none());
}

#[actix_web::test]
async fn test_signup_duplicate_email_conflicts() {
    let app = test::init_service(create_app(
        common::test_state(),
        Environment::Development,
        &CorsConfig::default(),
    ))
    .await;
    signup_and_login!(app, "user@email.com");

    let req = test::TestRequest::post()
        .uri("/api/user")
        .set_json(json!({ "email": "user@email.com", "password": "other-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "USER_ALREADY_EXISTS");
}

#[actix_web::test]
async fn test_signup_rejects_invalid_input() {
    let app = test::init_service(create_app(
        common::test_state(),
        Environment::Development,
        &CorsConfig::default(),
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/user")
        .set_json(json!({ "email": "not-an-email", "password": "test-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"].get("email").is_some());

    let req = test::TestRequest::post()
        .uri("/api/user")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_login_issues_bearer_token() {
    let state = common::test_state();
    let app = test::init_service(create_app(
        state.clone(),
        Environment::Development,
        &CorsConfig::default(),
    ))
    .await;

    let token = signup_and_login!(app, "user@email.com");

    assert!(state.token_service.is_valid(&token));
    assert_eq!(state.token_service.extract_user_id(&token).unwrap(), 1);
    assert_eq!(
        state.token_service.decode_identity(&token).unwrap().subject,
        "user@email.com"
    );
}

#[actix_web::test]
async fn test_login_response_shape() {
    let app = test::init_service(create_app(
        common::test_state(),
        Environment::Development,
        &CorsConfig::default(),
    ))
    .await;
    signup_and_login!(app, "user@email.com");

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": "user@email.com", "password": common::TEST_PASSWORD }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 3600);
    assert_eq!(body["access_token"].as_str().unwrap().split('.').count(), 3);
}

#[actix_web::test]
async fn test_login_wrong_password_is_unauthorized() {
    let app = test::init_service(create_app(
        common::test_state(),
        Environment::Development,
        &CorsConfig::default(),
    ))
    .await;
    signup_and_login!(app, "user@email.com");

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": "user@email.com", "password": "wrong-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "AUTHENTICATION_FAILED");
}

#[actix_web::test]
async fn test_login_unknown_user_is_not_found() {
    let app = test::init_service(create_app(
        common::test_state(),
        Environment::Development,
        &CorsConfig::default(),
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": "nobody@email.com", "password": "test-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "USER_NOT_FOUND");
}

#[actix_web::test]
async fn test_health_and_unknown_route() {
    let app = test::init_service(create_app(
        common::test_state(),
        Environment::Development,
        &CorsConfig::default(),
    ))
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");

    let req = test::TestRequest::get().uri("/no-such-page").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
