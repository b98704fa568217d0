//! User infrastructure module
//!
//! Provides the PostgreSQL and in-memory repository implementations plus the
//! user service the API layer talks to.

mod postgres_repository;
pub(crate) mod repository;
mod service;

pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UpdateUserRequest, UserService};
