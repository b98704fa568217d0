//! Migrate command - applies pending migrations and exits

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{self, run_user_migrations, PostgresConfig, PostgresMigrator};

/// Apply all pending migrations against the configured database
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let pool = storage::connect(&PostgresConfig::from(&config.database)).await?;

    run_user_migrations(&pool).await?;

    let migrator = PostgresMigrator::new(pool.clone());
    let version = migrator.current_version().await?;
    info!("Migrations applied, current version: {:?}", version);

    pool.close().await;

    Ok(())
}
