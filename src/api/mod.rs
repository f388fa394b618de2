//! API layer for flightdb
//!
//! Requests arrive as JSON envelopes naming an operation and its arguments;
//! responses carry an ok/error status with the data or an error code.
//!
//! # Design Principles
//!
//! - One endpoint, named operations
//! - Absence reported as null data, not as an error
//! - Store error codes passed through unchanged
//!
//! # Supported Operations
//!
//! - flights
//! - flight
//! - createFlight
//! - updateFlight
//! - deleteFlight

mod errors;
mod handler;
mod request;
mod response;
mod server;

pub use errors::{ApiError, ApiResult};
pub use handler::ApiHandler;
pub use request::Request;
pub use response::{ErrorResponse, Response, SuccessResponse};
pub use server::ApiServer;
