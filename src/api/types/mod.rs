//! Shared API types - error shape and JSON extraction

pub mod error;
pub mod json;

pub use error::{ApiError, ErrorResponse, INTERNAL_SERVER_ERROR};
pub use json::Json;
