use crate::aircraft::Aircraft;
use crate::airport::Airport;
use crate::error::{AirportError, ScenarioError};
use crate::flight::{Flight, FlightId};
use crate::gate::{Gate, GateId};
use crate::runway::{Runway, RunwayId};
use crate::schedule::{SchedulerConfig, SimpleScheduler};
use crate::time::Time;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    pub id: GateId,
    pub name: String,
    pub max_wingspan_m: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunwayConfig {
    pub id: RunwayId,
    pub name: String,
    pub length_m: u32,
    #[serde(default)]
    pub maintenance: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlightConfig {
    pub id: FlightId,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub planned_departure: Time,
    pub planned_arrival: Time,
    pub aircraft: Aircraft,
}

/// An airport layout and its flights, as read from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub airport: String,
    #[serde(default)]
    pub readiness_ratio: Option<f64>,
    #[serde(default)]
    pub gates: Vec<GateConfig>,
    #[serde(default)]
    pub runways: Vec<RunwayConfig>,
    #[serde(default)]
    pub flights: Vec<FlightConfig>,
}

impl Scenario {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn build(self) -> Result<Airport, AirportError> {
        let config = match self.readiness_ratio {
            Some(ratio) => SchedulerConfig::new(ratio)?,
            None => SchedulerConfig::default(),
        };
        let mut airport = Airport::with_scheduler(self.airport, SimpleScheduler::new(config));

        for g in self.gates {
            airport.add_gate(Gate::new(g.id, g.name, g.max_wingspan_m))?;
        }
        for r in self.runways {
            let runway_id = r.id.clone();
            airport.add_runway(Runway::new(r.id, r.name, r.length_m))?;
            if r.maintenance {
                airport.begin_runway_maintenance(&runway_id)?;
            }
        }
        for f in self.flights {
            airport.add_flight(Flight::new(
                f.id,
                f.flight_number,
                f.origin,
                f.destination,
                f.planned_departure,
                f.planned_arrival,
                f.aircraft,
            )?)?;
        }

        info!(
            airport = %airport.name,
            gates = airport.gates().count(),
            runways = airport.runways().count(),
            flights = airport.schedule().len(),
            "scenario loaded"
        );
        Ok(airport)
    }
}
