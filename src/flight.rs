use crate::aircraft::{Aircraft, AircraftKind, Performance};
use crate::error::{AirportError, Result};
use crate::gate::GateId;
use crate::runway::RunwayId;
use crate::time::Time;
use std::fmt;
use std::sync::Arc;
use tracing::info;

pub type FlightId = Arc<str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlightStatus {
    #[default]
    Planned,
    Boarding,
    Ready,
    Taxi,
    Airborne,
    Landed,
    Cancelled,
}

impl FlightStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, FlightStatus::Landed | FlightStatus::Cancelled)
    }

    /// The next state along the regular lifecycle.
    pub fn next(self) -> Option<FlightStatus> {
        match self {
            FlightStatus::Planned => Some(FlightStatus::Boarding),
            FlightStatus::Boarding => Some(FlightStatus::Ready),
            FlightStatus::Ready => Some(FlightStatus::Taxi),
            FlightStatus::Taxi => Some(FlightStatus::Airborne),
            FlightStatus::Airborne => Some(FlightStatus::Landed),
            FlightStatus::Landed | FlightStatus::Cancelled => None,
        }
    }

    pub fn can_transition_to(self, to: FlightStatus) -> bool {
        match to {
            FlightStatus::Cancelled => !self.is_terminal(),
            _ => self.next() == Some(to),
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlightStatus::Planned => "PLANNED",
            FlightStatus::Boarding => "BOARDING",
            FlightStatus::Ready => "READY",
            FlightStatus::Taxi => "TAXI",
            FlightStatus::Airborne => "AIRBORNE",
            FlightStatus::Landed => "LANDED",
            FlightStatus::Cancelled => "CANCELLED",
        };
        write!(f, "{name}")
    }
}

/// Something put on board a flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Load {
    Passengers(u32),
    CargoKg(f64),
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Load::Passengers(count) => write!(f, "{count} passengers"),
            Load::CargoKg(kg) => write!(f, "{kg} kg of cargo"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    id: FlightId,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub planned_departure: Time,
    pub planned_arrival: Time,
    aircraft: Aircraft,
    status: FlightStatus,
    pub(crate) gate_id: Option<GateId>,
    pub(crate) runway_id: Option<RunwayId>,
    passengers_checked_in: u32,
    cargo_loaded_kg: f64,
}

impl Flight {
    pub fn new(
        id: impl Into<FlightId>,
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        planned_departure: Time,
        planned_arrival: Time,
        aircraft: Aircraft,
    ) -> Result<Flight> {
        let id = id.into();
        aircraft.validate()?;
        if planned_arrival <= planned_departure {
            return Err(AirportError::InvalidSchedule {
                flight: id,
                reason: format!("arrival {planned_arrival} is not after departure {planned_departure}"),
            });
        }

        Ok(Flight {
            id,
            flight_number: flight_number.into(),
            origin: origin.into(),
            destination: destination.into(),
            planned_departure,
            planned_arrival,
            aircraft,
            status: FlightStatus::Planned,
            gate_id: None,
            runway_id: None,
            passengers_checked_in: 0,
            cargo_loaded_kg: 0.0,
        })
    }

    pub fn id(&self) -> &FlightId {
        &self.id
    }

    pub fn aircraft(&self) -> &Aircraft {
        &self.aircraft
    }

    pub fn status(&self) -> FlightStatus {
        self.status
    }

    pub fn gate_id(&self) -> Option<&GateId> {
        self.gate_id.as_ref()
    }

    pub fn runway_id(&self) -> Option<&RunwayId> {
        self.runway_id.as_ref()
    }

    pub fn passengers_checked_in(&self) -> u32 {
        self.passengers_checked_in
    }

    pub fn cargo_loaded_kg(&self) -> f64 {
        self.cargo_loaded_kg
    }

    pub fn block_minutes(&self) -> u64 {
        self.planned_arrival - self.planned_departure
    }

    pub fn can_board(&self) -> bool {
        self.status == FlightStatus::Boarding && self.aircraft.is_passenger()
    }

    pub fn set_status(&mut self, new_status: FlightStatus) -> Result<()> {
        if !self.status.can_transition_to(new_status) {
            return Err(AirportError::IllegalTransition {
                flight: self.id.clone(),
                from: self.status,
                to: new_status,
            });
        }
        info!(flight = %self.id, from = %self.status, to = %new_status, "status changed");
        self.status = new_status;
        Ok(())
    }

    pub fn board_passengers(&mut self, count: u32) -> Result<()> {
        self.expect_boarding("board passengers")?;
        if !self.aircraft.is_passenger() {
            return Err(AirportError::WrongAircraftKind {
                flight: self.id.clone(),
                load: Load::Passengers(count),
            });
        }

        let capacity = self.aircraft.capacity();
        let total = self.passengers_checked_in.checked_add(count);
        match total {
            Some(total) if total <= capacity => {
                self.passengers_checked_in = total;
                Ok(())
            }
            _ => Err(AirportError::CapacityExceeded {
                flight: self.id.clone(),
                requested: Load::Passengers(self.passengers_checked_in.saturating_add(count)),
                capacity: Load::Passengers(capacity),
            }),
        }
    }

    pub fn load_cargo(&mut self, kg: f64) -> Result<()> {
        self.expect_boarding("load cargo")?;
        let max_payload_kg = match &self.aircraft.kind {
            AircraftKind::Cargo(cargo) => cargo.max_payload_kg,
            AircraftKind::Passenger(_) => {
                return Err(AirportError::WrongAircraftKind {
                    flight: self.id.clone(),
                    load: Load::CargoKg(kg),
                });
            }
        };
        if !kg.is_finite() || kg < 0.0 {
            return Err(AirportError::InvalidLoad {
                flight: self.id.clone(),
                kg,
            });
        }

        let total = self.cargo_loaded_kg + kg;
        if total > max_payload_kg {
            return Err(AirportError::CapacityExceeded {
                flight: self.id.clone(),
                requested: Load::CargoKg(total),
                capacity: Load::CargoKg(max_payload_kg),
            });
        }
        self.cargo_loaded_kg = total;
        Ok(())
    }

    /// Whether at least `ratio` of the aircraft's capacity is on board.
    pub fn load_reached(&self, ratio: f64) -> bool {
        match &self.aircraft.kind {
            AircraftKind::Passenger(p) => {
                let needed = (f64::from(p.capacity()) * ratio).ceil();
                f64::from(self.passengers_checked_in) >= needed
            }
            AircraftKind::Cargo(c) => self.cargo_loaded_kg >= c.max_payload_kg * ratio,
        }
    }

    fn expect_boarding(&self, action: &'static str) -> Result<()> {
        if self.status != FlightStatus::Boarding {
            return Err(AirportError::InvalidState {
                flight: self.id.clone(),
                status: self.status,
                action,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight {} {}->{} ({})",
            self.flight_number, self.origin, self.destination, self.status
        )
    }
}
