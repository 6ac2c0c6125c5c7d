//! Database bootstrap: connection pool and schema application.

use sqlx::PgPool;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Connect to Postgres using the given connection string.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Apply the schema. Every statement is `IF NOT EXISTS`, so this is
/// safe to run on every startup.
pub async fn apply_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    tracing::debug!("schema applied");
    Ok(())
}
