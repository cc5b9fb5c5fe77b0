use crate::flight::{FlightId, FlightStatus, Load};
use crate::runway::RunwayStatus;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// The kind of entity an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Flight,
    Gate,
    Runway,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Flight => write!(f, "flight"),
            EntityKind::Gate => write!(f, "gate"),
            EntityKind::Runway => write!(f, "runway"),
        }
    }
}

/// Failures of airport model operations.
///
/// An operation that returns one of these has left the model as it found it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AirportError {
    #[error("{kind} {id} already exists")]
    DuplicateId { kind: EntityKind, id: Arc<str> },

    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: Arc<str> },

    #[error("gate {gate} is occupied by flight {occupant}")]
    AlreadyOccupied { gate: Arc<str>, occupant: FlightId },

    #[error("runway {runway} is not available ({status})")]
    NotAvailable { runway: Arc<str>, status: RunwayStatus },

    #[error("runway {runway} is {status}, expected {expected}")]
    InvalidRunwayState {
        runway: Arc<str>,
        status: RunwayStatus,
        expected: RunwayStatus,
    },

    #[error("flight {flight} cannot {action} while {status}")]
    InvalidState {
        flight: FlightId,
        status: FlightStatus,
        action: &'static str,
    },

    #[error("flight {flight} cannot go from {from} to {to}")]
    IllegalTransition {
        flight: FlightId,
        from: FlightStatus,
        to: FlightStatus,
    },

    #[error("flight {flight} would carry {requested}, capacity is {capacity}")]
    CapacityExceeded {
        flight: FlightId,
        requested: Load,
        capacity: Load,
    },

    #[error("flight {flight} cannot take {load} on this aircraft")]
    WrongAircraftKind { flight: FlightId, load: Load },

    #[error("flight {flight} cannot load {kg} kg")]
    InvalidLoad { flight: FlightId, kg: f64 },

    #[error("no free gate fits flight {flight} (wingspan {wingspan_m} m)")]
    NoGateAvailable { flight: FlightId, wingspan_m: f64 },

    #[error("no free runway fits flight {flight} (needs {required_length_m} m)")]
    NoRunwayAvailable {
        flight: FlightId,
        required_length_m: u32,
    },

    #[error("aircraft {registration} is invalid: {reason}")]
    InvalidAircraft {
        registration: String,
        reason: String,
    },

    #[error("flight {flight} has an invalid schedule: {reason}")]
    InvalidSchedule { flight: FlightId, reason: String },

    #[error("readiness ratio must be in (0, 1], got {0}")]
    InvalidReadiness(f64),
}

pub type Result<T> = std::result::Result<T, AirportError>;

/// Failures while reading a scenario and building an airport from it.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Airport(#[from] AirportError),
}
