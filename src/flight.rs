//! Flight domain types.
//!
//! A single entity backed by the `flight` table. `Flight` is the persisted
//! record; `FlightInput` carries the six data fields and doubles as the
//! projected shape returned by the single-flight lookup.

use serde::{Deserialize, Serialize};

/// A persisted flight record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Flight {
    /// Store-generated identifier
    pub id: i64,
    pub flight_code: String,
    pub origin: String,
    pub destination: String,
    pub air_time: f64,
    pub distance: f64,
    pub airport: String,
}

/// The mutable attributes of a flight.
///
/// Every field is required; deserialization fails when one is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FlightInput {
    pub flight_code: String,
    pub origin: String,
    pub destination: String,
    pub air_time: f64,
    pub distance: f64,
    pub airport: String,
}

impl Flight {
    /// Compose a full record from an id and input values.
    pub fn from_input(id: i64, input: &FlightInput) -> Self {
        Self {
            id,
            flight_code: input.flight_code.clone(),
            origin: input.origin.clone(),
            destination: input.destination.clone(),
            air_time: input.air_time,
            distance: input.distance,
            airport: input.airport.clone(),
        }
    }

    /// Project to the data fields, dropping `id`.
    pub fn to_input(&self) -> FlightInput {
        FlightInput {
            flight_code: self.flight_code.clone(),
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            air_time: self.air_time,
            distance: self.distance,
            airport: self.airport.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

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

    #[test]
    fn test_from_input_copies_all_fields() {
        let input = sample_input();
        let flight = Flight::from_input(7, &input);

        assert_eq!(flight.id, 7);
        assert_eq!(flight.flight_code, "AA100");
        assert_eq!(flight.origin, "JFK");
        assert_eq!(flight.destination, "LAX");
        assert_eq!(flight.air_time, 360.0);
        assert_eq!(flight.distance, 2475.0);
        assert_eq!(flight.airport, "JFK");
    }

    #[test]
    fn test_projection_round_trip() {
        let input = sample_input();
        let flight = Flight::from_input(1, &input);

        assert_eq!(flight.to_input(), input);
    }

    #[test]
    fn test_input_requires_every_field() {
        let missing_airport = json!({
            "flight_code": "AA100",
            "origin": "JFK",
            "destination": "LAX",
            "air_time": 360.0,
            "distance": 2475.0
        });

        let result: Result<FlightInput, _> = serde_json::from_value(missing_airport);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialized_input_has_no_id() {
        let value = serde_json::to_value(sample_input()).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["flight_code"], "AA100");
    }
}
