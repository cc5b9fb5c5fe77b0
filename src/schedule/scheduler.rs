use crate::error::{AirportError, Result};
use crate::flight::{FlightId, FlightStatus};
use crate::schedule::Schedule;
use crate::time::Time;
use std::collections::HashMap;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchedulerConfig {
    /// Share of capacity that must be on board before a flight is ready.
    pub readiness_ratio: f64,
}

impl SchedulerConfig {
    pub fn new(readiness_ratio: f64) -> Result<SchedulerConfig> {
        if !(readiness_ratio > 0.0 && readiness_ratio <= 1.0) {
            return Err(AirportError::InvalidReadiness(readiness_ratio));
        }
        Ok(SchedulerConfig { readiness_ratio })
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            readiness_ratio: 1.0,
        }
    }
}

/// Applies simple status rules to every flight in a schedule.
#[derive(Debug, Clone, Default)]
pub struct SimpleScheduler {
    config: SchedulerConfig,
}

impl SimpleScheduler {
    pub fn new(config: SchedulerConfig) -> SimpleScheduler {
        SimpleScheduler { config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Moves boarding flights that reached the readiness ratio to READY.
    pub fn auto_ready_if_boarded(&self, schedule: &mut Schedule) -> Result<Vec<FlightId>> {
        let ratio = self.config.readiness_ratio;
        let mut promoted = Vec::new();
        for flight in schedule
            .iter_mut()
            .filter(|f| f.status() == FlightStatus::Boarding)
            .filter(|f| f.load_reached(ratio))
        {
            flight.set_status(FlightStatus::Ready)?;
            promoted.push(flight.id().clone());
        }
        debug!(promoted = promoted.len(), ratio, "readiness scan complete");
        Ok(promoted)
    }

    /// Pairs of live flights sharing a flight number whose planned windows overlap.
    pub fn number_conflicts(&self, schedule: &Schedule) -> Vec<(FlightId, FlightId)> {
        let mut by_number: HashMap<&str, Vec<(&FlightId, (Time, Time))>> = HashMap::new();
        let mut conflicts = Vec::new();

        schedule
            .iter()
            .filter(|f| f.status() != FlightStatus::Cancelled)
            .for_each(|f| {
                let window = (f.planned_departure, f.planned_arrival);
                let seen = by_number.entry(f.flight_number.as_str()).or_default();
                seen.iter()
                    .filter(|(_, other)| Time::is_overlapping(&window, other))
                    .for_each(|(other_id, _)| {
                        conflicts.push(((*other_id).clone(), f.id().clone()));
                    });
                seen.push((f.id(), window));
            });

        if !conflicts.is_empty() {
            info!(conflicts = conflicts.len(), "flight number conflicts found");
        }
        conflicts
    }
}
