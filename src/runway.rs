use crate::aircraft::Aircraft;
use crate::error::{AirportError, Result};
use crate::flight::FlightId;
use std::fmt;
use std::sync::Arc;

pub type RunwayId = Arc<str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunwayStatus {
    #[default]
    Free,
    InUse,
    Maintenance,
}

impl fmt::Display for RunwayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunwayStatus::Free => write!(f, "FREE"),
            RunwayStatus::InUse => write!(f, "IN_USE"),
            RunwayStatus::Maintenance => write!(f, "MAINTENANCE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Runway {
    pub id: RunwayId,
    pub name: String,
    pub length_m: u32,
    status: RunwayStatus,
    current_flight: Option<FlightId>,
}

impl Runway {
    pub fn new(id: impl Into<RunwayId>, name: impl Into<String>, length_m: u32) -> Runway {
        Runway {
            id: id.into(),
            name: name.into(),
            length_m,
            status: RunwayStatus::Free,
            current_flight: None,
        }
    }

    pub fn status(&self) -> RunwayStatus {
        self.status
    }

    pub fn current_flight(&self) -> Option<&FlightId> {
        self.current_flight.as_ref()
    }

    pub fn is_available(&self) -> bool {
        self.status == RunwayStatus::Free
    }

    pub fn accommodates(&self, aircraft: &Aircraft) -> bool {
        self.length_m >= aircraft.min_runway_length_m
    }

    pub fn occupy(&mut self, flight_id: FlightId) -> Result<()> {
        if !self.is_available() {
            return Err(AirportError::NotAvailable {
                runway: self.id.clone(),
                status: self.status,
            });
        }
        self.status = RunwayStatus::InUse;
        self.current_flight = Some(flight_id);
        Ok(())
    }

    /// Frees a runway in use. Runways under maintenance stay closed.
    pub fn release(&mut self) -> Option<FlightId> {
        match self.status {
            RunwayStatus::Maintenance => None,
            RunwayStatus::Free | RunwayStatus::InUse => {
                self.status = RunwayStatus::Free;
                self.current_flight.take()
            }
        }
    }

    pub fn begin_maintenance(&mut self) -> Result<()> {
        match self.status {
            RunwayStatus::InUse => Err(AirportError::NotAvailable {
                runway: self.id.clone(),
                status: self.status,
            }),
            RunwayStatus::Free | RunwayStatus::Maintenance => {
                self.status = RunwayStatus::Maintenance;
                Ok(())
            }
        }
    }

    pub fn end_maintenance(&mut self) -> Result<()> {
        match self.status {
            RunwayStatus::Maintenance => {
                self.status = RunwayStatus::Free;
                Ok(())
            }
            RunwayStatus::Free | RunwayStatus::InUse => Err(AirportError::InvalidRunwayState {
                runway: self.id.clone(),
                status: self.status,
                expected: RunwayStatus::Maintenance,
            }),
        }
    }
}

impl fmt::Display for Runway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
