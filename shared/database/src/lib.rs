pub mod migrations;
pub mod postgres;
pub mod repositories;
pub mod seed;

pub use postgres::{create_postgres_pool, health_check as postgres_health_check, PostgresPool};
pub use repositories::*;
pub use seed::seed_demo_data;

use anyhow::Result;
use millwright_utils::DatabaseConfig;

/// Connect, migrate, and (when configured) seed demo data.
pub async fn initialize_database(config: &DatabaseConfig) -> Result<PostgresPool> {
    let pool = create_postgres_pool(config).await?;

    migrations::run_postgres_migrations(&pool).await?;

    if config.seed_demo {
        seed::seed_demo_data(&pool).await?;
    }

    Ok(pool)
}
