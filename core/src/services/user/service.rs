//! User account service implementation

use std::sync::Arc;

use blog_shared::validation::{is_valid_email, normalize_email};
use chrono::Duration;

use crate::domain::entities::user::{NewUser, User};
use crate::domain::value_objects::AccessToken;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::UserServiceConfig;
use super::password::{hash_password, verify_password};

/// bcrypt ignores input past this many bytes
const MAX_PASSWORD_BYTES: usize = 72;

/// Service for account registration, lookup and login
pub struct UserService<U>
where
    U: UserRepository,
{
    /// User repository for persistence
    user_repository: Arc<U>,
    /// Token service used to issue login tokens
    token_service: Arc<TokenService>,
    /// Service configuration
    config: UserServiceConfig,
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    /// Create a new user service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for issuing login tokens
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: UserServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    /// Register a new account
    ///
    /// The email is normalized before the uniqueness check and storage; the
    /// password is stored only as a bcrypt hash.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The persisted user
    /// * `Err(DomainError)` - Invalid email or password, or email already taken
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<User> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if password.chars().count() < self.config.min_password_length
            || password.len() > MAX_PASSWORD_BYTES
        {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                min: self.config.min_password_length,
                max: MAX_PASSWORD_BYTES,
            }
            .into());
        }

        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = hash_password(password.to_string(), self.config.bcrypt_cost).await?;
        let user = self
            .user_repository
            .save(NewUser::new(email, password_hash))
            .await?;

        tracing::info!(user_id = user.id, "Registered new user");
        Ok(user)
    }

    /// Load a user by email
    ///
    /// # Errors
    ///
    /// `AuthError::UserNotFound` when no account uses this email.
    pub async fn load_user_by_email(&self, email: &str) -> DomainResult<User> {
        let email = normalize_email(email);
        self.user_repository
            .find_by_email(&email)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound { email }))
    }

    /// Load a user by id
    pub async fn find_by_id(&self, id: i64) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Authenticate with email and password and issue an access token
    ///
    /// # Returns
    ///
    /// * `Ok(AccessToken)` - Bearer token valid for the configured lifetime
    /// * `Err(DomainError)` - `UserNotFound` for an unknown email,
    ///   `AuthenticationFailed` for a wrong password
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AccessToken> {
        let user = self.load_user_by_email(email).await?;

        if !verify_password(password.to_string(), user.password_hash.clone()).await? {
            tracing::warn!(user_id = user.id, "Login rejected: wrong password");
            return Err(AuthError::AuthenticationFailed.into());
        }

        let ttl = Duration::seconds(self.config.access_token_expiry_seconds);
        let token = self.token_service.issue(&user, ttl)?;

        tracing::info!(user_id = user.id, "User logged in");
        Ok(AccessToken::bearer(token, self.config.access_token_expiry_seconds))
    }
}
