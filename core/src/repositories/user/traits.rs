//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and storage-agnostic: the in-memory
//! implementation backs tests and local runs, the MySQL implementation
//! lives in the infrastructure crate.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example
/// ```no_run
/// # use blog_core::repositories::UserRepository;
/// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
/// match repo.find_by_email("user@email.com").await? {
///     Some(user) => println!("User found: {}", user.id),
///     None => println!("User not found"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with that email
    /// * `Err(DomainError)` - Storage error
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Persist a new user and return it with its assigned id
    ///
    /// # Errors
    /// `AuthError::UserAlreadyExists` when the email is already taken.
    async fn save(&self, user: NewUser) -> Result<User, DomainError>;
}
