//! flightdb - A small, self-hostable flight records service
//!
//! Flight records live in one relational table reachable through five named
//! operations: flights, flight, createFlight, updateFlight, deleteFlight.

pub mod api;
pub mod cli;
pub mod config;
pub mod flight;
pub mod store;
