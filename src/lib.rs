//! User Directory API
//!
//! A minimal REST service for managing user records (name, email) backed by
//! PostgreSQL. Exposes list, create, get-by-id, update, and delete endpoints
//! under the `/user` prefix, plus health probes.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use sqlx::PgPool;

use api::state::AppState;
use infrastructure::user::{PostgresUserRepository, UserService};

/// Build the application state around an already-opened connection pool
///
/// The caller owns the pool's lifecycle; this wires the repository and service
/// behind the state's dynamic dispatch.
pub fn create_app_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PostgresUserRepository::new(pool));
    let service = Arc::new(UserService::new(repository));

    AppState::new(service)
}
