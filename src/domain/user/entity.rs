//! User entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{parse_user_id, UserValidationError};

/// User identifier - database-generated integer, immutable after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a store-assigned identifier
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse a UserId from a path parameter
    pub fn parse(raw: &str) -> Result<Self, UserValidationError> {
        parse_user_id(raw).map(Self)
    }

    /// Get the inner integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier assigned by the store
    id: UserId,
    /// Display name
    name: String,
    /// Email address, unique across all users
    email: String,
}

impl User {
    /// Create a user from store-assigned parts
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
