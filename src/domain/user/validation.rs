//! User payload validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email exceeds maximum length of {0} characters")]
    EmailTooLong(usize),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid user ID format.")]
    InvalidIdFormat,
}

const MAX_NAME_LENGTH: usize = 255;
const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .expect("email pattern must compile")
});

/// Validate a user name
///
/// Rules:
/// - Cannot be empty
/// - Maximum 255 characters
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(UserValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate an email address
///
/// Rules:
/// - Cannot be empty
/// - Maximum 254 characters
/// - Must be RFC-shaped: local part, '@', dotted domain
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(UserValidationError::EmailTooLong(MAX_EMAIL_LENGTH));
    }

    if !EMAIL_PATTERN.is_match(email) || email.contains("..") {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// Parse a user ID from a path parameter
///
/// The ID must be a base-10 integer; anything else is rejected with the
/// message surfaced to API clients.
pub fn parse_user_id(raw: &str) -> Result<i64, UserValidationError> {
    raw.parse::<i64>()
        .map_err(|_| UserValidationError::InvalidIdFormat)
}
