use airport_sim::aircraft::{AircraftKind, Performance};
use airport_sim::board::{flights_table, gates_table, runways_table};
use airport_sim::flight::{FlightId, FlightStatus};
use airport_sim::scenario::Scenario;
use airport_sim::{Airport, AirportError};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Runs every planned flight of an airport scenario through a departure")]
struct Args {
    /// Path to the JSON scenario file
    #[arg(short, long, value_name = "FILE", default_value = "data/default.json")]
    scenario: PathBuf,

    /// Share of capacity on board before a flight is declared ready, overrides the scenario
    #[arg(short, long, value_name = "RATIO")]
    readiness: Option<f64>,
}

/// Gate, boarding, readiness, runway and departure for one flight.
fn turnaround(airport: &mut Airport, flight_id: &FlightId) -> Result<(), AirportError> {
    let gate_id = airport.assign_gate(flight_id)?;
    info!(flight = %flight_id, gate = %gate_id, "at gate");

    airport.set_flight_status(flight_id, FlightStatus::Boarding)?;
    let aircraft = airport.find_flight(flight_id)?.aircraft().clone();
    match &aircraft.kind {
        AircraftKind::Passenger(_) => {
            let capacity = aircraft.capacity();
            airport.board_passengers(flight_id, capacity / 2)?;
            let remaining = capacity - airport.find_flight(flight_id)?.passengers_checked_in();
            airport.board_passengers(flight_id, remaining)?;
        }
        AircraftKind::Cargo(cargo) => airport.load_cargo(flight_id, cargo.max_payload_kg)?,
    }

    airport.auto_ready()?;
    let status = airport.find_flight(flight_id)?.status();
    if status != FlightStatus::Ready {
        return Err(AirportError::InvalidState {
            flight: flight_id.clone(),
            status,
            action: "depart",
        });
    }

    airport.assign_runway_for_departure(flight_id)?;
    airport.depart(flight_id)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("airport_sim=info")),
        )
        .init();

    let args = Args::parse();
    let mut scenario = Scenario::load_from_file(&args.scenario)?;
    if args.readiness.is_some() {
        scenario.readiness_ratio = args.readiness;
    }
    let mut airport = scenario.build()?;
    println!("Tower online at {}. Loaded flights from {}", airport, args.scenario.display());

    let conflicts = airport.scheduler().number_conflicts(airport.schedule());
    for (first, second) in &conflicts {
        warn!(first = %first, second = %second, "flight number flown twice at once");
    }

    let planned: Vec<FlightId> = airport
        .schedule()
        .list_planned()
        .iter()
        .map(|f| f.id().clone())
        .collect();
    for flight_id in &planned {
        if let Err(err) = turnaround(&mut airport, flight_id) {
            warn!(flight = %flight_id, error = %err, "turnaround stopped");
        }
    }

    println!("{}", flights_table(&airport));
    println!("{}", gates_table(&airport));
    println!("{}", runways_table(&airport));
    Ok(())
}
