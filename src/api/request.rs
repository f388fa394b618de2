//! API request types
//!
//! JSON request parsing for all supported operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::flight::FlightInput;

use super::errors::{ApiError, ApiResult};

/// Unified request envelope
#[derive(Debug, Clone)]
pub enum Request {
    /// `flights`: list every flight
    Flights,
    /// `flight`: look up one flight by id
    Flight { id: i64 },
    /// `createFlight`: persist a new flight
    CreateFlight { input: FlightInput },
    /// `updateFlight`: replace every data field of an existing flight
    UpdateFlight { id: i64, input: FlightInput },
    /// `deleteFlight`: remove a flight by id
    DeleteFlight { id: i64 },
}

/// Raw request for parsing
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawRequest {
    op: String,
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    input: Option<Value>,
}

fn parse_id(id: Option<i64>) -> ApiResult<i64> {
    id.ok_or_else(|| ApiError::invalid_request("Missing id"))
}

fn parse_input(input: Option<Value>) -> ApiResult<FlightInput> {
    let input = input.ok_or_else(|| ApiError::invalid_request("Missing input"))?;
    serde_json::from_value(input)
        .map_err(|e| ApiError::invalid_request(format!("Invalid input: {}", e)))
}

impl Request {
    /// Parse a request from JSON string
    pub fn parse(json: &str) -> ApiResult<Self> {
        let raw: RawRequest = serde_json::from_str(json)
            .map_err(|e| ApiError::invalid_request(format!("Invalid JSON: {}", e)))?;

        match raw.op.as_str() {
            "flights" => Ok(Request::Flights),
            "flight" => Ok(Request::Flight {
                id: parse_id(raw.id)?,
            }),
            "createFlight" => Ok(Request::CreateFlight {
                input: parse_input(raw.input)?,
            }),
            "updateFlight" => Ok(Request::UpdateFlight {
                id: parse_id(raw.id)?,
                input: parse_input(raw.input)?,
            }),
            "deleteFlight" => Ok(Request::DeleteFlight {
                id: parse_id(raw.id)?,
            }),
            other => Err(ApiError::unknown_operation(other)),
        }
    }
}
