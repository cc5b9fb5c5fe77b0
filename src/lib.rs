//! An in-memory airport: aircraft, flights, gates, runways and a
//! rule-based scheduler tying resource assignment to the flight lifecycle.

pub mod aircraft;
pub mod airport;
pub mod board;
pub mod error;
pub mod flight;
pub mod gate;
pub mod runway;
pub mod scenario;
pub mod schedule;
pub mod time;

#[cfg(test)]
mod test_utils;

pub use airport::Airport;
pub use error::{AirportError, Result, ScenarioError};
