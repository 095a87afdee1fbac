//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use blog_core::domain::entities::user::{NewUser, User};
use blog_core::errors::{AuthError, DomainError};
use blog_core::repositories::UserRepository;

use super::{db_error, is_duplicate_key};

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: row.try_get("id").map_err(|e| db_error("Failed to get id", e))?,
            email: row
                .try_get("email")
                .map_err(|e| db_error("Failed to get email", e))?,
            password_hash: row
                .try_get("password")
                .map_err(|e| db_error("Failed to get password", e))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find user by email", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find user by id", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn save(&self, user: NewUser) -> Result<User, DomainError> {
        let result = sqlx::query("INSERT INTO users (email, password) VALUES (?, ?)")
            .bind(&user.email)
            .bind(&user.password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    DomainError::Auth(AuthError::UserAlreadyExists)
                } else {
                    db_error("Failed to save user", e)
                }
            })?;

        Ok(user.with_id(result.last_insert_id() as i64))
    }
}
