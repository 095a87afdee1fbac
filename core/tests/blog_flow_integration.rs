//! End-to-end flow through the public service API with in-memory repositories

use std::sync::Arc;

use blog_core::domain::entities::article::ArticleDraft;
use blog_core::errors::{AuthError, DomainError};
use blog_core::repositories::{MockArticleRepository, MockUserRepository};
use blog_core::services::{
    BlogService, TokenService, TokenServiceConfig, UserService, UserServiceConfig,
};

fn services() -> (
    Arc<TokenService>,
    UserService<MockUserRepository>,
    BlogService<MockArticleRepository>,
) {
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::new(
        "inkwell-test",
        "integration-secret",
    )));
    let user_service = UserService::new(
        Arc::new(MockUserRepository::new()),
        Arc::clone(&token_service),
        UserServiceConfig {
            access_token_expiry_seconds: 600,
            bcrypt_cost: 4,
            min_password_length: 4,
        },
    );
    let blog_service = BlogService::new(Arc::new(MockArticleRepository::new()));
    (token_service, user_service, blog_service)
}

#[tokio::test]
async fn test_login_then_write_as_decoded_principal() {
    let (token_service, users, blog) = services();
    let user = users.register("writer@email.com", "password").await.unwrap();

    let issued = users.login("writer@email.com", "password").await.unwrap();
    let principal = token_service.decode_identity(&issued.access_token).unwrap();
    assert_eq!(
        token_service.extract_user_id(&issued.access_token).unwrap(),
        user.id
    );

    let article = blog
        .save(ArticleDraft::new("Hello", "First post"), &principal)
        .await
        .unwrap();
    assert_eq!(article.author, user.email);

    let edited = blog
        .update(article.id, ArticleDraft::new("Hello again", "Edited"), &principal)
        .await
        .unwrap();
    assert_eq!(edited.title, "Hello again");
}

#[tokio::test]
async fn test_other_user_token_cannot_delete() {
    let (token_service, users, blog) = services();
    users.register("writer@email.com", "password").await.unwrap();
    users.register("reader@email.com", "password").await.unwrap();

    let writer_token = users.login("writer@email.com", "password").await.unwrap();
    let reader_token = users.login("reader@email.com", "password").await.unwrap();
    let writer = token_service
        .decode_identity(&writer_token.access_token)
        .unwrap();
    let reader = token_service
        .decode_identity(&reader_token.access_token)
        .unwrap();

    let article = blog
        .save(ArticleDraft::new("Mine", "Hands off"), &writer)
        .await
        .unwrap();

    assert!(matches!(
        blog.delete(article.id, &reader).await,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
    blog.delete(article.id, &writer).await.unwrap();
    assert!(blog.find_all().await.unwrap().is_empty());
}
