//! Flight table schema sync.
//!
//! One idempotent DDL statement per dialect. Runs from the `sync` command or
//! once at serve startup, never during request handling.

use sqlx::AnyPool;

use crate::config::Dialect;

use super::errors::{StoreError, StoreResult};

/// DDL for the flight table in the given dialect.
pub fn create_table_sql(dialect: Dialect) -> String {
    match dialect {
        Dialect::PostgreSQL => r#"CREATE TABLE IF NOT EXISTS flight (
    id BIGSERIAL PRIMARY KEY,
    flight_code TEXT NOT NULL,
    origin TEXT NOT NULL,
    destination TEXT NOT NULL,
    air_time DOUBLE PRECISION NOT NULL,
    distance DOUBLE PRECISION NOT NULL,
    airport TEXT NOT NULL
)"#
        .to_string(),
        Dialect::MySQL => r#"CREATE TABLE IF NOT EXISTS flight (
    id BIGINT AUTO_INCREMENT PRIMARY KEY,
    flight_code VARCHAR(255) NOT NULL,
    origin VARCHAR(255) NOT NULL,
    destination VARCHAR(255) NOT NULL,
    air_time DOUBLE NOT NULL,
    distance DOUBLE NOT NULL,
    airport VARCHAR(255) NOT NULL
)"#
        .to_string(),
        Dialect::SQLite => r#"CREATE TABLE IF NOT EXISTS flight (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    flight_code TEXT NOT NULL,
    origin TEXT NOT NULL,
    destination TEXT NOT NULL,
    air_time REAL NOT NULL,
    distance REAL NOT NULL,
    airport TEXT NOT NULL
)"#
        .to_string(),
    }
}

/// Apply the flight table DDL. Safe to run repeatedly.
pub async fn apply_schema(pool: &AnyPool, dialect: Dialect) -> StoreResult<()> {
    let sql = create_table_sql(dialect);

    sqlx::query(&sql)
        .execute(pool)
        .await
        .map_err(|e| StoreError::Schema {
            message: format!("Failed to sync flight table: {}", e),
        })?;

    tracing::info!("flight table schema synced ({})", dialect);

    Ok(())
}
