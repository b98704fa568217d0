//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Message surfaced when a looked-up user does not exist
pub const USER_NOT_FOUND: &str = "User not found.";

/// Message surfaced when an email collides with another user
pub const EMAIL_IN_USE: &str = "Email is already in use. Please use a different email.";

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// List all users, ordered by id (insertion order)
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Get a user by their ID
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by their email address
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user; the store assigns the ID
    async fn create(&self, name: &str, email: &str) -> Result<User, DomainError>;

    /// Update an existing user's name and email
    async fn update(&self, id: UserId, name: &str, email: &str) -> Result<User, DomainError>;

    /// Delete a user, returning whether a row was removed
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;

    /// Check if an email address is already taken
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_email(email).await?.is_some())
    }
}
