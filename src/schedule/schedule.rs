use crate::error::{AirportError, EntityKind, Result};
use crate::flight::{Flight, FlightId, FlightStatus};
use std::collections::HashMap;
use tracing::debug;

/// Flights keyed by id, kept in insertion order.
#[derive(Debug, Default, Clone)]
pub struct Schedule {
    flights: Vec<Flight>,
    flights_index: HashMap<FlightId, usize>,
}

impl Schedule {
    pub fn new() -> Schedule {
        Schedule::default()
    }

    pub fn add_flight(&mut self, flight: Flight) -> Result<()> {
        if self.flights_index.contains_key(flight.id()) {
            return Err(AirportError::DuplicateId {
                kind: EntityKind::Flight,
                id: flight.id().clone(),
            });
        }
        debug!(flight = %flight.id(), number = %flight.flight_number, "flight scheduled");
        self.flights_index.insert(flight.id().clone(), self.flights.len());
        self.flights.push(flight);

        self.assert_invariants();
        Ok(())
    }

    pub fn remove_flight(&mut self, flight_id: &FlightId) -> Result<Flight> {
        let idx = self
            .flights_index
            .remove(flight_id)
            .ok_or_else(|| not_found(flight_id))?;
        let flight = self.flights.remove(idx);
        self.flights
            .iter()
            .enumerate()
            .skip(idx)
            .for_each(|(i, f)| {
                self.flights_index.insert(f.id().clone(), i);
            });
        debug!(flight = %flight_id, "flight removed from schedule");

        self.assert_invariants();
        Ok(flight)
    }

    pub fn get(&self, flight_id: &FlightId) -> Option<&Flight> {
        self.flights_index.get(flight_id).map(|idx| &self.flights[*idx])
    }

    pub fn get_mut(&mut self, flight_id: &FlightId) -> Option<&mut Flight> {
        self.flights_index
            .get(flight_id)
            .map(|idx| &mut self.flights[*idx])
    }

    pub(crate) fn find(&self, flight_id: &FlightId) -> Result<&Flight> {
        self.get(flight_id).ok_or_else(|| not_found(flight_id))
    }

    pub(crate) fn find_mut(&mut self, flight_id: &FlightId) -> Result<&mut Flight> {
        self.get_mut(flight_id).ok_or_else(|| not_found(flight_id))
    }

    pub fn contains(&self, flight_id: &FlightId) -> bool {
        self.flights_index.contains_key(flight_id)
    }

    pub fn find_by_number(&self, flight_number: &str) -> Vec<&Flight> {
        self.flights
            .iter()
            .filter(|f| f.flight_number == flight_number)
            .collect()
    }

    pub fn list_planned(&self) -> Vec<&Flight> {
        self.flights
            .iter()
            .filter(|f| f.status() == FlightStatus::Planned)
            .collect()
    }

    pub fn all(&self) -> &[Flight] {
        &self.flights
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flight> {
        self.flights.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Flight> {
        self.flights.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        debug_assert_eq!(
            self.flights.len(),
            self.flights_index.len(),
            "Flights <-> index size invariant violated"
        );
        debug_assert!(
            self.flights
                .iter()
                .enumerate()
                .all(|(i, f)| self.flights_index.get(f.id()) == Some(&i)),
            "Flight id <-> position invariant violated"
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_invariants(&self) {}
}

fn not_found(flight_id: &FlightId) -> AirportError {
    AirportError::NotFound {
        kind: EntityKind::Flight,
        id: flight_id.clone(),
    }
}
