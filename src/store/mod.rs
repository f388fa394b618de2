//! Relational flight store.
//!
//! The store is reached exclusively through the [`FlightStore`] trait; the
//! API layer never sees a pool or SQL text. [`SqlFlightStore`] is the
//! production implementation over PostgreSQL, MySQL or SQLite, and
//! [`InMemoryFlightStore`] backs tests.

mod connection;
mod errors;
mod memory;
mod schema;
mod sql;

pub use connection::{build_connection_string, create_pool, test_connection};
pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryFlightStore;
pub use schema::{apply_schema, create_table_sql};
pub use sql::SqlFlightStore;

use async_trait::async_trait;

use crate::flight::{Flight, FlightInput};

/// Persistence operations on the flight table.
#[async_trait]
pub trait FlightStore: Send + Sync {
    /// Returns every flight, ordered by id.
    async fn list(&self) -> StoreResult<Vec<Flight>>;

    /// Looks up one flight by id, projecting the data fields without the id.
    /// `None` means no such flight exists.
    async fn get(&self, id: i64) -> StoreResult<Option<FlightInput>>;

    /// Persists a new flight and returns it with its generated id.
    async fn insert(&self, input: &FlightInput) -> StoreResult<Flight>;

    /// Replaces every data field of the flight with the given id. `None`
    /// means no such flight existed, and nothing was written.
    async fn update(&self, id: i64, input: &FlightInput) -> StoreResult<Option<Flight>>;

    /// Removes the flight with the given id, returning its final state.
    /// `None` means no such flight existed.
    async fn delete(&self, id: i64) -> StoreResult<Option<Flight>>;
}
