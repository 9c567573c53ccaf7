//! Schema bootstrap
//!
//! The schema is idempotent (`IF NOT EXISTS`), so it is applied on every startup.

use sqlx::SqlitePool;
use tracing::info;

const INIT: &str = include_str!("../../migrations/0001_init.sql");

/// Create tables and indexes that do not exist yet
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(INIT).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
