use crate::aircraft::Aircraft;
use crate::error::{AirportError, EntityKind, Result};
use crate::flight::{Flight, FlightId, FlightStatus};
use crate::gate::{Gate, GateId};
use crate::runway::{Runway, RunwayId};
use crate::schedule::{Schedule, SimpleScheduler};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};


/// The root aggregate: owns gates, runways and the flight schedule.
///
/// Gates and runways are kept ordered by id so every search picks the
/// lowest eligible id.
#[derive(Debug, Clone)]
pub struct Airport {
    pub name: String,
    gates: BTreeMap<GateId, Gate>,
    runways: BTreeMap<RunwayId, Runway>,
    schedule: Schedule,
    scheduler: SimpleScheduler,
}

impl Airport {
    pub fn new(name: impl Into<String>) -> Airport {
        Airport::with_scheduler(name, SimpleScheduler::default())
    }

    pub fn with_scheduler(name: impl Into<String>, scheduler: SimpleScheduler) -> Airport {
        Airport {
            name: name.into(),
            gates: BTreeMap::new(),
            runways: BTreeMap::new(),
            schedule: Schedule::new(),
            scheduler,
        }
    }

    pub fn add_gate(&mut self, gate: Gate) -> Result<()> {
        if self.gates.contains_key(&gate.id) {
            return Err(AirportError::DuplicateId {
                kind: EntityKind::Gate,
                id: gate.id.clone(),
            });
        }
        self.gates.insert(gate.id.clone(), gate);
        Ok(())
    }

    pub fn add_runway(&mut self, runway: Runway) -> Result<()> {
        if self.runways.contains_key(&runway.id) {
            return Err(AirportError::DuplicateId {
                kind: EntityKind::Runway,
                id: runway.id.clone(),
            });
        }
        self.runways.insert(runway.id.clone(), runway);
        Ok(())
    }

    pub fn add_flight(&mut self, flight: Flight) -> Result<()> {
        self.schedule.add_flight(flight)
    }

    pub fn find_flight(&self, flight_id: &FlightId) -> Result<&Flight> {
        self.schedule.find(flight_id)
    }

    #[cfg(test)]
    pub(crate) fn flight_mut(&mut self, flight_id: &FlightId) -> Result<&mut Flight> {
        self.schedule.find_mut(flight_id)
    }

    /// Moves a flight through its ground phases.
    ///
    /// TAXI, AIRBORNE and LANDED only happen through [`Airport::depart`] and
    /// [`Airport::arrive`]. CANCELLED frees the gate and runway but keeps the
    /// flight on the schedule.
    pub fn set_flight_status(&mut self, flight_id: &FlightId, status: FlightStatus) -> Result<()> {
        let flight = self.schedule.find(flight_id)?;
        if matches!(
            status,
            FlightStatus::Taxi | FlightStatus::Airborne | FlightStatus::Landed
        ) {
            return Err(invalid_state(flight, "move without depart or arrive"));
        }

        self.schedule.find_mut(flight_id)?.set_status(status)?;
        if status == FlightStatus::Cancelled {
            self.release_gate(flight_id)?;
            self.release_runway(flight_id)?;
        }
        Ok(())
    }

    pub fn board_passengers(&mut self, flight_id: &FlightId, count: u32) -> Result<()> {
        self.schedule.find_mut(flight_id)?.board_passengers(count)
    }

    pub fn load_cargo(&mut self, flight_id: &FlightId, kg: f64) -> Result<()> {
        self.schedule.find_mut(flight_id)?.load_cargo(kg)
    }

    pub fn gate(&self, gate_id: &GateId) -> Option<&Gate> {
        self.gates.get(gate_id)
    }

    pub fn runway(&self, runway_id: &RunwayId) -> Option<&Runway> {
        self.runways.get(runway_id)
    }

    pub fn gates(&self) -> impl Iterator<Item = &Gate> {
        self.gates.values()
    }

    pub fn runways(&self) -> impl Iterator<Item = &Runway> {
        self.runways.values()
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn scheduler(&self) -> &SimpleScheduler {
        &self.scheduler
    }

    pub fn assign_gate(&mut self, flight_id: &FlightId) -> Result<GateId> {
        let flight = self.schedule.find(flight_id)?;
        if matches!(flight.status(), FlightStatus::Taxi | FlightStatus::Airborne)
            || flight.status().is_terminal()
        {
            return Err(invalid_state(flight, "take a gate"));
        }
        if let Some(gate_id) = flight.gate_id() {
            return Ok(gate_id.clone());
        }

        let gate_id = self
            .free_gate_for(flight.aircraft())
            .ok_or_else(|| AirportError::NoGateAvailable {
                flight: flight_id.clone(),
                wingspan_m: flight.aircraft().wingspan_m,
            })?;
        self.park(flight_id, &gate_id)?;
        Ok(gate_id)
    }

    pub fn release_gate(&mut self, flight_id: &FlightId) -> Result<Option<GateId>> {
        let flight = self.schedule.find_mut(flight_id)?;
        let gate_id = flight.gate_id.take();
        if let Some(gate) = gate_id.as_ref().and_then(|id| self.gates.get_mut(id)) {
            gate.release();
            debug!(flight = %flight_id, gate = %gate.id, "gate released");
        }
        Ok(gate_id)
    }

    pub fn assign_runway_for_departure(&mut self, flight_id: &FlightId) -> Result<RunwayId> {
        let flight = self.schedule.find(flight_id)?;
        if !matches!(
            flight.status(),
            FlightStatus::Planned | FlightStatus::Boarding | FlightStatus::Ready
        ) {
            return Err(invalid_state(flight, "take a departure runway"));
        }
        if let Some(runway_id) = flight.runway_id() {
            return Ok(runway_id.clone());
        }

        let runway_id = self
            .free_runway_for(flight.aircraft())
            .ok_or_else(|| no_runway(flight))?;
        self.occupy_runway(flight_id, &runway_id)?;
        info!(flight = %flight_id, runway = %runway_id, "departure runway assigned");
        Ok(runway_id)
    }

    pub fn depart(&mut self, flight_id: &FlightId) -> Result<()> {
        let flight = self.schedule.find(flight_id)?;
        if flight.status() != FlightStatus::Ready
            || flight.gate_id().is_none()
            || flight.runway_id().is_none()
        {
            return Err(invalid_state(flight, "depart"));
        }

        self.schedule
            .find_mut(flight_id)?
            .set_status(FlightStatus::Taxi)?;
        self.release_gate(flight_id)?;
        self.schedule
            .find_mut(flight_id)?
            .set_status(FlightStatus::Airborne)?;
        self.release_runway(flight_id)?;
        info!(flight = %flight_id, "departed");
        Ok(())
    }

    /// Lands an airborne flight and parks it at a gate, which stays occupied.
    pub fn arrive(&mut self, flight_id: &FlightId) -> Result<GateId> {
        let flight = self.schedule.find(flight_id)?;
        if flight.status() != FlightStatus::Airborne {
            return Err(invalid_state(flight, "arrive"));
        }
        let held_runway = flight.runway_id().cloned();
        let runway_id = match &held_runway {
            Some(held) => held.clone(),
            None => self
                .free_runway_for(flight.aircraft())
                .ok_or_else(|| no_runway(flight))?,
        };
        let gate_id = match flight.gate_id() {
            Some(held) => held.clone(),
            None => self.free_gate_for(flight.aircraft()).ok_or_else(|| {
                AirportError::NoGateAvailable {
                    flight: flight_id.clone(),
                    wingspan_m: flight.aircraft().wingspan_m,
                }
            })?,
        };

        if held_runway.is_none() {
            self.occupy_runway(flight_id, &runway_id)?;
        }
        self.schedule
            .find_mut(flight_id)?
            .set_status(FlightStatus::Landed)?;
        self.release_runway(flight_id)?;
        self.park(flight_id, &gate_id)?;
        info!(flight = %flight_id, runway = %runway_id, gate = %gate_id, "landed");
        Ok(gate_id)
    }

    /// Cancels a flight, frees whatever it holds and takes it off the schedule.
    /// A flight already marked CANCELLED is just taken off.
    pub fn cancel_flight(&mut self, flight_id: &FlightId) -> Result<Flight> {
        let flight = self.schedule.find_mut(flight_id)?;
        if flight.status() != FlightStatus::Cancelled {
            flight.set_status(FlightStatus::Cancelled)?;
        }
        let flight = self.remove_flight(flight_id)?;
        info!(flight = %flight_id, "cancelled");
        Ok(flight)
    }

    pub fn remove_flight(&mut self, flight_id: &FlightId) -> Result<Flight> {
        self.release_gate(flight_id)?;
        self.release_runway(flight_id)?;
        self.schedule.remove_flight(flight_id)
    }

    pub fn begin_runway_maintenance(&mut self, runway_id: &RunwayId) -> Result<()> {
        self.runway_mut(runway_id)?.begin_maintenance()?;
        info!(runway = %runway_id, "runway closed for maintenance");
        Ok(())
    }

    pub fn end_runway_maintenance(&mut self, runway_id: &RunwayId) -> Result<()> {
        self.runway_mut(runway_id)?.end_maintenance()?;
        info!(runway = %runway_id, "runway reopened");
        Ok(())
    }

    /// Runs the airport's scheduler over its flights.
    pub fn auto_ready(&mut self) -> Result<Vec<FlightId>> {
        self.scheduler.auto_ready_if_boarded(&mut self.schedule)
    }

    fn runway_mut(&mut self, runway_id: &RunwayId) -> Result<&mut Runway> {
        self.runways
            .get_mut(runway_id)
            .ok_or_else(|| AirportError::NotFound {
                kind: EntityKind::Runway,
                id: runway_id.clone(),
            })
    }

    fn free_gate_for(&self, aircraft: &Aircraft) -> Option<GateId> {
        self.gates
            .values()
            .find(|g| g.is_free() && g.accommodates(aircraft))
            .map(|g| g.id.clone())
    }

    fn free_runway_for(&self, aircraft: &Aircraft) -> Option<RunwayId> {
        self.runways
            .values()
            .find(|r| r.is_available() && r.accommodates(aircraft))
            .map(|r| r.id.clone())
    }

    fn park(&mut self, flight_id: &FlightId, gate_id: &GateId) -> Result<()> {
        let gate = self
            .gates
            .get_mut(gate_id)
            .ok_or_else(|| AirportError::NotFound {
                kind: EntityKind::Gate,
                id: gate_id.clone(),
            })?;
        gate.assign(flight_id.clone())?;
        self.schedule.find_mut(flight_id)?.gate_id = Some(gate_id.clone());
        info!(flight = %flight_id, gate = %gate_id, "gate assigned");
        Ok(())
    }

    fn occupy_runway(&mut self, flight_id: &FlightId, runway_id: &RunwayId) -> Result<()> {
        self.runway_mut(runway_id)?.occupy(flight_id.clone())?;
        self.schedule.find_mut(flight_id)?.runway_id = Some(runway_id.clone());
        debug!(flight = %flight_id, runway = %runway_id, "runway occupied");
        Ok(())
    }

    fn release_runway(&mut self, flight_id: &FlightId) -> Result<Option<RunwayId>> {
        let flight = self.schedule.find_mut(flight_id)?;
        let runway_id = flight.runway_id.take();
        if let Some(runway) = runway_id.as_ref().and_then(|id| self.runways.get_mut(id)) {
            runway.release();
            debug!(flight = %flight_id, runway = %runway.id, "runway released");
        }
        Ok(runway_id)
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn invalid_state(flight: &Flight, action: &'static str) -> AirportError {
    AirportError::InvalidState {
        flight: flight.id().clone(),
        status: flight.status(),
        action,
    }
}

fn no_runway(flight: &Flight) -> AirportError {
    AirportError::NoRunwayAvailable {
        flight: flight.id().clone(),
        required_length_m: flight.aircraft().min_runway_length_m,
    }
}
