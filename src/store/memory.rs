//! In-memory flight store.
//!
//! Follows the same contract as the SQL store: ids are generated
//! sequentially starting at 1, lookups project the data fields without the
//! id, and update/delete report a missing id as `None`. Used as a test
//! double wherever a real database would only slow the suite down.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::flight::{Flight, FlightInput};

use super::errors::{StoreError, StoreResult};
use super::FlightStore;

pub struct InMemoryFlightStore {
    flights: RwLock<Vec<Flight>>,
    next_id: AtomicI64,
}

impl InMemoryFlightStore {
    pub fn new() -> Self {
        Self {
            flights: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryFlightStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> StoreError {
    StoreError::Query {
        message: "Lock poisoned".to_string(),
        sql: None,
    }
}

#[async_trait]
impl FlightStore for InMemoryFlightStore {
    async fn list(&self) -> StoreResult<Vec<Flight>> {
        let flights = self.flights.read().map_err(|_| poisoned())?;
        // Insertion order matches id order.
        Ok(flights.clone())
    }

    async fn get(&self, id: i64) -> StoreResult<Option<FlightInput>> {
        let flights = self.flights.read().map_err(|_| poisoned())?;
        Ok(flights.iter().find(|f| f.id == id).map(Flight::to_input))
    }

    async fn insert(&self, input: &FlightInput) -> StoreResult<Flight> {
        let mut flights = self.flights.write().map_err(|_| poisoned())?;

        // Allocated under the write lock, so vec order matches id order.
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let flight = Flight::from_input(id, input);

        flights.push(flight.clone());
        Ok(flight)
    }

    async fn update(&self, id: i64, input: &FlightInput) -> StoreResult<Option<Flight>> {
        let mut flights = self.flights.write().map_err(|_| poisoned())?;

        match flights.iter_mut().find(|f| f.id == id) {
            Some(existing) => {
                *existing = Flight::from_input(id, input);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<Option<Flight>> {
        let mut flights = self.flights.write().map_err(|_| poisoned())?;

        match flights.iter().position(|f| f.id == id) {
            Some(index) => Ok(Some(flights.remove(index))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> FlightInput {
        FlightInput {
            flight_code: "AA100".to_string(),
            origin: "JFK".to_string(),
            destination: "LAX".to_string(),
            air_time: 360.0,
            distance: 2475.0,
            airport: "JFK".to_string(),
        }
    }

    fn other_input() -> FlightInput {
        FlightInput {
            flight_code: "BA9".to_string(),
            origin: "LHR".to_string(),
            destination: "SYD".to_string(),
            air_time: 1260.0,
            distance: 10573.0,
            airport: "LHR".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryFlightStore::new();

        let first = store.insert(&sample_input()).await.unwrap();
        let second = store.insert(&other_input()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_get_projects_without_id() {
        let store = InMemoryFlightStore::new();
        let created = store.insert(&sample_input()).await.unwrap();

        let found = store.get(created.id).await.unwrap();

        assert_eq!(found, Some(sample_input()));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = InMemoryFlightStore::new();

        assert_eq!(store.get(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let store = InMemoryFlightStore::new();
        let created = store.insert(&sample_input()).await.unwrap();

        let updated = store.update(created.id, &other_input()).await.unwrap();

        assert_eq!(updated, Some(Flight::from_input(created.id, &other_input())));
        assert_eq!(store.get(created.id).await.unwrap(), Some(other_input()));
    }

    #[tokio::test]
    async fn test_update_missing_leaves_store_unchanged() {
        let store = InMemoryFlightStore::new();
        store.insert(&sample_input()).await.unwrap();

        let updated = store.update(999, &other_input()).await.unwrap();

        assert_eq!(updated, None);
        assert_eq!(store.list().await.unwrap().len(), 1);
        assert_eq!(store.get(1).await.unwrap(), Some(sample_input()));
    }

    #[tokio::test]
    async fn test_delete_returns_final_state() {
        let store = InMemoryFlightStore::new();
        let created = store.insert(&sample_input()).await.unwrap();

        let deleted = store.delete(created.id).await.unwrap();

        assert_eq!(deleted, Some(created));
        assert_eq!(store.get(1).await.unwrap(), None);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_returns_none() {
        let store = InMemoryFlightStore::new();

        assert_eq!(store.delete(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = InMemoryFlightStore::new();
        store.insert(&sample_input()).await.unwrap();
        store.insert(&other_input()).await.unwrap();

        let flights = store.list().await.unwrap();

        let ids: Vec<i64> = flights.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
