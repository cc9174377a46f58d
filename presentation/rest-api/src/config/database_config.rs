use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

/// Initialize database connection pool from environment variables and
/// bring the schema up to date.
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Directory holding SQL migrations (default: "./migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails or a
/// migration cannot be applied
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let mut config = DatabaseConfig::new(db_url);
    if let Some(max) = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
    {
        config = config.with_max_connections(max);
    }

    let pool = create_postgres_pool(&config).await?;

    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| "./migrations".to_string());
    run_migrations(&pool, &migrations_path).await?;

    Ok(pool)
}
