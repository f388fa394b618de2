//! SQL-backed flight store.
//!
//! Statement text is selected per dialect: PostgreSQL uses `$n` placeholders,
//! MySQL and SQLite use `?`. Inserts read the generated id from `RETURNING id`
//! everywhere except MySQL, which reports it through the driver. Update and
//! delete are single conditional statements driven by the affected-row count,
//! so a missing id is detected without a prior read and a lost race never
//! reports success.

use async_trait::async_trait;
use sqlx::AnyPool;

use crate::config::Dialect;
use crate::flight::{Flight, FlightInput};

use super::errors::{StoreError, StoreResult};
use super::FlightStore;

const LIST_SQL: &str =
    "SELECT id, flight_code, origin, destination, air_time, distance, airport \
     FROM flight ORDER BY id";

fn get_sql(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::PostgreSQL => {
            "SELECT flight_code, origin, destination, air_time, distance, airport \
             FROM flight WHERE id = $1"
        }
        Dialect::MySQL | Dialect::SQLite => {
            "SELECT flight_code, origin, destination, air_time, distance, airport \
             FROM flight WHERE id = ?"
        }
    }
}

fn snapshot_sql(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::PostgreSQL => {
            "SELECT id, flight_code, origin, destination, air_time, distance, airport \
             FROM flight WHERE id = $1"
        }
        Dialect::MySQL | Dialect::SQLite => {
            "SELECT id, flight_code, origin, destination, air_time, distance, airport \
             FROM flight WHERE id = ?"
        }
    }
}

fn insert_sql(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::PostgreSQL => {
            "INSERT INTO flight (flight_code, origin, destination, air_time, distance, airport) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id"
        }
        // The Any driver does not report SQLite's generated rowid; RETURNING
        // (SQLite 3.35+) carries it instead.
        Dialect::SQLite => {
            "INSERT INTO flight (flight_code, origin, destination, air_time, distance, airport) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING id"
        }
        Dialect::MySQL => {
            "INSERT INTO flight (flight_code, origin, destination, air_time, distance, airport) \
             VALUES (?, ?, ?, ?, ?, ?)"
        }
    }
}

fn update_sql(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::PostgreSQL => {
            "UPDATE flight SET flight_code = $1, origin = $2, destination = $3, \
             air_time = $4, distance = $5, airport = $6 WHERE id = $7"
        }
        Dialect::MySQL | Dialect::SQLite => {
            "UPDATE flight SET flight_code = ?, origin = ?, destination = ?, \
             air_time = ?, distance = ?, airport = ? WHERE id = ?"
        }
    }
}

fn delete_sql(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::PostgreSQL => "DELETE FROM flight WHERE id = $1",
        Dialect::MySQL | Dialect::SQLite => "DELETE FROM flight WHERE id = ?",
    }
}

/// Flight store over a shared sqlx pool.
pub struct SqlFlightStore {
    pool: AnyPool,
    dialect: Dialect,
}

impl SqlFlightStore {
    pub fn new(pool: AnyPool, dialect: Dialect) -> Self {
        Self { pool, dialect }
    }
}

#[async_trait]
impl FlightStore for SqlFlightStore {
    async fn list(&self) -> StoreResult<Vec<Flight>> {
        sqlx::query_as::<_, Flight>(LIST_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::Query {
                message: format!("Failed to list flights: {}", e),
                sql: Some(LIST_SQL.to_string()),
            })
    }

    async fn get(&self, id: i64) -> StoreResult<Option<FlightInput>> {
        let sql = get_sql(self.dialect);

        sqlx::query_as::<_, FlightInput>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Query {
                message: format!("Failed to load flight {}: {}", id, e),
                sql: Some(sql.to_string()),
            })
    }

    async fn insert(&self, input: &FlightInput) -> StoreResult<Flight> {
        let sql = insert_sql(self.dialect);

        let id: i64 = match self.dialect {
            Dialect::PostgreSQL | Dialect::SQLite => sqlx::query_scalar(sql)
                .bind(input.flight_code.as_str())
                .bind(input.origin.as_str())
                .bind(input.destination.as_str())
                .bind(input.air_time)
                .bind(input.distance)
                .bind(input.airport.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| StoreError::Query {
                    message: format!("Failed to insert flight: {}", e),
                    sql: Some(sql.to_string()),
                })?,
            Dialect::MySQL => {
                let result = sqlx::query(sql)
                    .bind(input.flight_code.as_str())
                    .bind(input.origin.as_str())
                    .bind(input.destination.as_str())
                    .bind(input.air_time)
                    .bind(input.distance)
                    .bind(input.airport.as_str())
                    .execute(&self.pool)
                    .await
                    .map_err(|e| StoreError::Query {
                        message: format!("Failed to insert flight: {}", e),
                        sql: Some(sql.to_string()),
                    })?;

                result.last_insert_id().ok_or_else(|| StoreError::Query {
                    message: "Insert did not report a generated id".to_string(),
                    sql: Some(sql.to_string()),
                })?
            }
        };

        Ok(Flight::from_input(id, input))
    }

    async fn update(&self, id: i64, input: &FlightInput) -> StoreResult<Option<Flight>> {
        let sql = update_sql(self.dialect);

        let result = sqlx::query(sql)
            .bind(input.flight_code.as_str())
            .bind(input.origin.as_str())
            .bind(input.destination.as_str())
            .bind(input.air_time)
            .bind(input.distance)
            .bind(input.airport.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Query {
                message: format!("Failed to update flight {}: {}", id, e),
                sql: Some(sql.to_string()),
            })?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        // Full replace: the row now holds exactly id + input.
        Ok(Some(Flight::from_input(id, input)))
    }

    async fn delete(&self, id: i64) -> StoreResult<Option<Flight>> {
        let sql = snapshot_sql(self.dialect);

        let snapshot = sqlx::query_as::<_, Flight>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Query {
                message: format!("Failed to load flight {}: {}", id, e),
                sql: Some(sql.to_string()),
            })?;

        let Some(snapshot) = snapshot else {
            return Ok(None);
        };

        let sql = delete_sql(self.dialect);

        let result = sqlx::query(sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Query {
                message: format!("Failed to delete flight {}: {}", id, e),
                sql: Some(sql.to_string()),
            })?;

        if result.rows_affected() == 0 {
            // Row vanished between snapshot and delete.
            return Ok(None);
        }

        Ok(Some(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_placeholders() {
        assert!(get_sql(Dialect::PostgreSQL).contains("$1"));
        assert!(insert_sql(Dialect::PostgreSQL).contains("$6"));
        assert!(update_sql(Dialect::PostgreSQL).contains("$7"));
        assert!(delete_sql(Dialect::PostgreSQL).ends_with("$1"));
    }

    #[test]
    fn test_mysql_and_sqlite_placeholders() {
        for dialect in [Dialect::MySQL, Dialect::SQLite] {
            assert!(get_sql(dialect).contains("= ?"));
            assert_eq!(insert_sql(dialect).matches('?').count(), 6);
            assert_eq!(update_sql(dialect).matches('?').count(), 7);
        }
    }

    #[test]
    fn test_insert_id_strategy_per_dialect() {
        assert!(insert_sql(Dialect::PostgreSQL).ends_with("RETURNING id"));
        assert!(insert_sql(Dialect::SQLite).ends_with("RETURNING id"));
        assert!(!insert_sql(Dialect::MySQL).contains("RETURNING"));
    }

    #[test]
    fn test_get_projection_excludes_id() {
        for dialect in [Dialect::PostgreSQL, Dialect::MySQL, Dialect::SQLite] {
            let sql = get_sql(dialect);
            assert!(sql.starts_with("SELECT flight_code"));
            assert!(!sql.contains("SELECT id"));
        }
    }

    #[test]
    fn test_list_is_ordered() {
        assert!(LIST_SQL.ends_with("ORDER BY id"));
    }
}
