//! In-memory implementation of UserRepository for testing and local runs

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError};

use super::traits::UserRepository;

#[derive(Default)]
struct Store {
    next_id: i64,
    users: BTreeMap<i64, User>,
}

/// Mock user repository backed by a map
#[derive(Clone, Default)]
pub struct MockUserRepository {
    store: Arc<RwLock<Store>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.store.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;
        Ok(store.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn save(&self, user: NewUser) -> Result<User, DomainError> {
        let mut store = self.store.write().await;

        if store.users.values().any(|u| u.email == user.email) {
            return Err(AuthError::UserAlreadyExists.into());
        }

        store.next_id += 1;
        let user = user.with_id(store.next_id);
        store.users.insert(user.id, user.clone());
        Ok(user)
    }
}
