use crate::aircraft::Aircraft;
use crate::error::{AirportError, Result};
use crate::flight::FlightId;
use std::fmt;
use std::sync::Arc;

pub type GateId = Arc<str>;

#[derive(Debug, Clone, PartialEq)]
pub struct Gate {
    pub id: GateId,
    pub name: String,
    pub max_wingspan_m: f64,
    occupied_by: Option<FlightId>,
}

impl Gate {
    pub fn new(id: impl Into<GateId>, name: impl Into<String>, max_wingspan_m: f64) -> Gate {
        Gate {
            id: id.into(),
            name: name.into(),
            max_wingspan_m,
            occupied_by: None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.occupied_by.is_none()
    }

    pub fn occupied_by(&self) -> Option<&FlightId> {
        self.occupied_by.as_ref()
    }

    pub fn accommodates(&self, aircraft: &Aircraft) -> bool {
        aircraft.wingspan_m <= self.max_wingspan_m
    }

    /// Re-assigning the current occupant is a no-op.
    pub fn assign(&mut self, flight_id: FlightId) -> Result<()> {
        match &self.occupied_by {
            Some(occupant) if *occupant != flight_id => Err(AirportError::AlreadyOccupied {
                gate: self.id.clone(),
                occupant: occupant.clone(),
            }),
            _ => {
                self.occupied_by = Some(flight_id);
                Ok(())
            }
        }
    }

    pub fn release(&mut self) -> Option<FlightId> {
        self.occupied_by.take()
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
