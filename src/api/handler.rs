//! API handler.
//!
//! Dispatches parsed requests to the flight store and wraps the outcome in
//! the response envelope. Absence is data here: a lookup, update or delete
//! that misses reports null data with ok status, never an error.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::store::FlightStore;

use super::errors::ApiResult;
use super::request::Request;
use super::response::Response;

fn to_data<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).expect("Flight serialization cannot fail")
}

/// API handler over a shared flight store
pub struct ApiHandler {
    store: Arc<dyn FlightStore>,
}

impl ApiHandler {
    /// Create a new API handler
    pub fn new(store: Arc<dyn FlightStore>) -> Self {
        Self { store }
    }

    /// Handle a raw JSON request string
    pub async fn handle(&self, json_request: &str) -> Response {
        let request = match Request::parse(json_request) {
            Ok(r) => r,
            Err(e) => return Response::error(&e),
        };

        match self.execute(request).await {
            Ok(data) => Response::success(data),
            Err(e) => Response::error(&e),
        }
    }

    /// Execute a parsed request against the store
    pub async fn execute(&self, request: Request) -> ApiResult<Value> {
        match request {
            Request::Flights => Ok(to_data(&self.store.list().await?)),
            Request::Flight { id } => Ok(to_data(&self.store.get(id).await?)),
            Request::CreateFlight { input } => Ok(to_data(&self.store.insert(&input).await?)),
            Request::UpdateFlight { id, input } => {
                Ok(to_data(&self.store.update(id, &input).await?))
            }
            Request::DeleteFlight { id } => Ok(to_data(&self.store.delete(id).await?)),
        }
    }
}
