//! Unit tests for token service

use chrono::{Duration, Utc};
use serde_json::json;

use crate::domain::entities::token::{UserIdClaim, ROLE_USER};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

use super::JwtFactory;

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig::new("inkwell-test", "test-secret-key")
}

fn create_test_service() -> TokenService {
    TokenService::new(test_config())
}

fn test_user() -> User {
    User {
        id: 1,
        email: "user@email.com".to_string(),
        password_hash: "test".to_string(),
    }
}

#[test]
fn test_issue_then_valid() {
    let service = create_test_service();

    let token = service.issue(&test_user(), Duration::days(14)).unwrap();

    assert_eq!(token.split('.').count(), 3);
    assert!(service.is_valid(&token));
}

#[test]
fn test_issued_token_round_trips_identity() {
    let service = create_test_service();
    let user = test_user();

    let token = service.issue(&user, Duration::days(14)).unwrap();

    assert!(service.is_valid(&token));
    assert_eq!(service.extract_user_id(&token).unwrap(), 1);
    let principal = service.decode_identity(&token).unwrap();
    assert_eq!(principal.subject, "user@email.com");
    assert_eq!(principal.authorities, vec![ROLE_USER.to_string()]);
    assert_eq!(principal.credentials, token);
}

#[test]
fn test_issued_claims() {
    let service = create_test_service();
    let before = Utc::now().timestamp();

    let token = service.issue(&test_user(), Duration::hours(2)).unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(claims.iss, "inkwell-test");
    assert_eq!(claims.sub, "user@email.com");
    assert_eq!(claims.id, Some(UserIdClaim::Numeric(1)));
    assert!(claims.iat >= before);
    assert_eq!(claims.exp - claims.iat, 2 * 60 * 60);
}

#[test]
fn test_issued_header_marks_jwt() {
    let service = create_test_service();
    let token = service.issue(&test_user(), Duration::minutes(5)).unwrap();

    let header = jsonwebtoken::decode_header(&token).unwrap();
    assert_eq!(header.typ.as_deref(), Some("JWT"));
    assert_eq!(header.alg, jsonwebtoken::Algorithm::HS256);
}

#[test]
fn test_issue_rejects_non_positive_ttl() {
    let service = create_test_service();

    assert!(matches!(
        service.issue(&test_user(), Duration::zero()),
        Err(DomainError::Validation { .. })
    ));
    assert!(service.issue(&test_user(), Duration::seconds(-1)).is_err());
}

#[test]
fn test_expired_token_is_invalid() {
    let config = test_config();
    let service = TokenService::new(config.clone());
    let token = JwtFactory::builder()
        .expiration(Utc::now() - Duration::days(7))
        .create_token(&config);

    assert!(!service.is_valid(&token));
    assert_eq!(service.verify(&token), Err(TokenError::TokenExpired));
}

#[test]
fn test_default_factory_token_is_valid() {
    let config = test_config();
    let service = TokenService::new(config.clone());
    let token = JwtFactory::builder().create_token(&config);

    assert!(service.is_valid(&token));
}

#[test]
fn test_token_signed_with_other_secret_is_invalid() {
    let service = create_test_service();
    let token = JwtFactory::builder()
        .claim("id", json!(1))
        .create_token_with_secret("inkwell-test", "some-other-secret");

    assert!(!service.is_valid(&token));
    assert_eq!(service.verify(&token), Err(TokenError::InvalidSignature));
}

#[test]
fn test_malformed_tokens_are_invalid() {
    let service = create_test_service();

    for token in ["", "not-a-token", "a.b.c", "eyJhbGciOiJIUzI1NiJ9..", "...."] {
        assert!(!service.is_valid(token), "accepted {token:?}");
    }
    assert_eq!(service.verify("a.b.c"), Err(TokenError::InvalidTokenFormat));
}

#[test]
fn test_token_without_expiry_is_invalid() {
    let config = test_config();
    let service = TokenService::new(config.clone());
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &json!({ "iss": "inkwell-test", "iat": 0, "sub": "user@email.com" }),
        &jsonwebtoken::EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .unwrap();

    assert!(!service.is_valid(&token));
    assert!(matches!(
        service.verify(&token),
        Err(TokenError::MissingClaim { .. }) | Err(TokenError::InvalidTokenFormat)
    ));
}

#[test]
fn test_is_valid_is_idempotent() {
    let service = create_test_service();
    let token = service.issue(&test_user(), Duration::days(1)).unwrap();

    let first = service.is_valid(&token);
    let second = service.is_valid(&token);
    assert!(first);
    assert_eq!(first, second);

    let expired = JwtFactory::builder()
        .expiration(Utc::now() - Duration::days(1))
        .create_token(&test_config());
    assert_eq!(service.is_valid(&expired), service.is_valid(&expired));
}

#[test]
fn test_decode_identity_from_factory_subject() {
    let config = test_config();
    let service = TokenService::new(config.clone());
    let token = JwtFactory::builder()
        .subject("user@email.com")
        .create_token(&config);

    let principal = service.decode_identity(&token).unwrap();
    assert_eq!(principal.username(), "user@email.com");
}

#[test]
fn test_extract_user_id_from_factory_claim() {
    let config = test_config();
    let service = TokenService::new(config.clone());
    let token = JwtFactory::builder()
        .claim("id", json!(1))
        .create_token(&config);

    assert_eq!(service.extract_user_id(&token).unwrap(), 1);
}

#[test]
fn test_extract_user_id_without_claim() {
    let config = test_config();
    let service = TokenService::new(config.clone());
    let token = JwtFactory::builder().create_token(&config);

    assert!(matches!(
        service.extract_user_id(&token),
        Err(DomainError::Token(TokenError::MissingClaim { .. }))
    ));
}

#[test]
fn test_decode_rejects_expired_token() {
    let config = test_config();
    let service = TokenService::new(config.clone());
    let token = JwtFactory::builder()
        .claim("id", json!(1))
        .expiration(Utc::now() - Duration::days(7))
        .create_token(&config);

    assert!(matches!(
        service.decode_identity(&token),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
    assert!(matches!(
        service.extract_user_id(&token),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_decode_rejects_foreign_signature() {
    let service = create_test_service();
    let token = JwtFactory::builder()
        .claim("id", json!(1))
        .create_token_with_secret("inkwell-test", "some-other-secret");

    assert!(service.decode_identity(&token).is_err());
    assert!(service.extract_user_id(&token).is_err());
}

fn sign_payload(payload: serde_json::Value) -> String {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &payload,
        &jsonwebtoken::EncodingKey::from_secret(test_config().secret.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_token_without_issuer_is_valid() {
    let service = create_test_service();
    let exp = (Utc::now() + Duration::days(1)).timestamp();
    let token = sign_payload(json!({ "iat": 0, "exp": exp, "sub": "user@email.com", "id": 1 }));

    assert!(service.is_valid(&token));
    let claims = service.verify(&token).unwrap();
    assert_eq!(claims.iss, "");
    assert_eq!(service.extract_user_id(&token).unwrap(), 1);
}

#[test]
fn test_token_without_issued_at_is_valid() {
    let service = create_test_service();
    let exp = (Utc::now() + Duration::days(1)).timestamp();
    let token = sign_payload(json!({ "iss": "inkwell-test", "exp": exp, "sub": "user@email.com" }));

    assert!(service.is_valid(&token));
    assert_eq!(
        service.decode_identity(&token).unwrap().subject,
        "user@email.com"
    );
}

#[test]
fn test_token_with_only_expiry_is_valid() {
    let service = create_test_service();
    let exp = (Utc::now() + Duration::days(1)).timestamp();
    let token = sign_payload(json!({ "exp": exp }));

    assert!(service.is_valid(&token));
    assert!(matches!(
        service.decode_identity(&token),
        Err(DomainError::Token(TokenError::MissingClaim { claim })) if claim == "sub"
    ));
}

#[test]
fn test_token_with_string_id_is_valid() {
    let config = test_config();
    let service = TokenService::new(config.clone());
    let token = JwtFactory::builder()
        .claim("id", json!("1"))
        .create_token(&config);

    assert!(service.is_valid(&token));
    assert_eq!(
        service.verify(&token).unwrap().id,
        Some(UserIdClaim::Malformed)
    );
    assert!(matches!(
        service.extract_user_id(&token),
        Err(DomainError::Token(TokenError::MissingClaim { claim })) if claim == "id"
    ));
}
