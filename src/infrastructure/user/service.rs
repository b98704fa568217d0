//! User service for validation and persistence orchestration

use std::sync::Arc;

use crate::domain::user::{
    validate_email, validate_name, User, UserId, UserRepository, EMAIL_IN_USE,
};
use crate::domain::DomainError;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Request for updating an existing user
#[derive(Debug, Clone)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
}

/// User service sitting between the handlers and the repository
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    /// Get a user by their path-parameter ID
    pub async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        let user_id = UserId::parse(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        self.repository.get(user_id).await
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        validate_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;

        // The unique constraint still guards the race between this check and
        // the insert.
        if self.repository.email_exists(&request.email).await? {
            return Err(DomainError::conflict(EMAIL_IN_USE));
        }

        self.repository.create(&request.name, &request.email).await
    }

    /// Update an existing user's name and email
    pub async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User, DomainError> {
        let user_id = UserId::parse(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        validate_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository
            .update(user_id, &request.name, &request.email)
            .await
    }

    /// Delete a user, returning whether a row was removed
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let user_id = UserId::parse(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        self.repository.delete(user_id).await
    }
}
