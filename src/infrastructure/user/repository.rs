//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository, EMAIL_IN_USE, USER_NOT_FOUND};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Assigns sequential ids the way the database's autoincrement column would.
/// Backs the integration tests and local development without PostgreSQL.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<i64, User>>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id.value()).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email() == email).cloned())
    }

    async fn create(&self, name: &str, email: &str) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email() == email) {
            return Err(DomainError::conflict(EMAIL_IN_USE));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User::new(UserId::new(id), name, email);
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, id: UserId, name: &str, email: &str) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&id.value()) {
            return Err(DomainError::not_found(USER_NOT_FOUND));
        }

        let email_taken = users
            .values()
            .any(|u| u.email() == email && u.id() != id);

        if email_taken {
            return Err(DomainError::conflict(EMAIL_IN_USE));
        }

        let user = User::new(id, name, email);
        users.insert(id.value(), user.clone());

        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id.value()).is_some())
    }
}
