//! User entity representing a registered account.

use serde::{Deserialize, Serialize};

/// User entity representing a registered user
///
/// `id` is assigned by the storage layer and never changes afterwards.
/// `email` is unique across users and doubles as the token subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,

    /// Login email, stored normalized (trimmed, lowercase)
    pub email: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Returns the name the security layer knows this user by
    pub fn username(&self) -> &str {
        &self.email
    }
}

/// A user that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Attaches the storage-assigned id
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}
