use crate::aircraft::{
    Aircraft, AircraftKind, CargoAircraft, EngineType, PassengerAircraft, Performance,
};
use crate::airport::Airport;
use crate::flight::{Flight, FlightStatus};
use crate::gate::Gate;
use crate::runway::Runway;
use crate::time::Time;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn a320(aircraft_id: &str) -> Aircraft {
    Aircraft {
        id: id(aircraft_id),
        model: "A320neo".to_string(),
        registration: "D-AIAB".to_string(),
        empty_weight_kg: 43_000.0,
        max_takeoff_weight_kg: 79_000.0,
        engine_type: EngineType::Jet,
        wingspan_m: 35.8,
        min_runway_length_m: 2100,
        kind: AircraftKind::Passenger(PassengerAircraft {
            seat_rows: 30,
            seats_per_row: 6,
            fuel_capacity_l: 19_000.0,
            avg_consumption_l_per_100km: 24.0,
        }),
    }
}

pub fn b747f(aircraft_id: &str) -> Aircraft {
    Aircraft {
        id: id(aircraft_id),
        model: "B747F".to_string(),
        registration: "D-CARG".to_string(),
        empty_weight_kg: 180_000.0,
        max_takeoff_weight_kg: 396_000.0,
        engine_type: EngineType::Jet,
        wingspan_m: 68.4,
        min_runway_length_m: 3000,
        kind: AircraftKind::Cargo(CargoAircraft {
            cargo_volume_m3: 700.0,
            max_payload_kg: 130_000.0,
            fuel_capacity_l: 183_000.0,
            efficiency_factor: 0.85,
        }),
    }
}

pub fn with_wingspan(mut aircraft: Aircraft, wingspan_m: f64) -> Aircraft {
    aircraft.wingspan_m = wingspan_m;
    aircraft
}

pub fn flight_with(flight_id: &str, flight_number: &str, aircraft: Aircraft) -> Flight {
    Flight::new(
        flight_id,
        flight_number,
        "DEMO",
        "LHR",
        Time(540),
        Time(615),
        aircraft,
    )
    .unwrap()
}

pub fn flight_at(flight_id: &str, flight_number: &str, departure: u64, arrival: u64) -> Flight {
    Flight::new(
        flight_id,
        flight_number,
        "DEMO",
        "LHR",
        Time(departure),
        Time(arrival),
        a320(&format!("AC_{flight_id}")),
    )
    .unwrap()
}

/// Walks a flight along the regular lifecycle up to `status`.
pub fn advance_to(flight: &mut Flight, status: FlightStatus) {
    while flight.status() != status {
        let next = flight.status().next().unwrap();
        flight.set_status(next).unwrap();
    }
}

/// Two gates, two runways, an A320 flight `FL_1` and a 747 freighter `FL_2`.
pub fn demo_airport() -> Airport {
    let mut airport = Airport::new("Demo International");
    airport.add_gate(Gate::new("G_A1", "A1", 70.0)).unwrap();
    airport.add_gate(Gate::new("G_A2", "A2", 52.0)).unwrap();
    airport.add_runway(Runway::new("RW_1", "09L/27R", 3800)).unwrap();
    airport.add_runway(Runway::new("RW_2", "09R/27L", 2500)).unwrap();
    airport
        .add_flight(flight_with("FL_1", "AB123", a320("A320_1")))
        .unwrap();
    airport
        .add_flight(flight_with("FL_2", "CG900", b747f("B747_1")))
        .unwrap();
    airport
}

/// Gate, full boarding, READY and a runway for a passenger flight.
pub fn ready_for_departure(airport: &mut Airport, flight_id: &str) {
    let flight_id = id(flight_id);
    airport.assign_gate(&flight_id).unwrap();
    airport
        .set_flight_status(&flight_id, FlightStatus::Boarding)
        .unwrap();
    let capacity = airport.find_flight(&flight_id).unwrap().aircraft().capacity();
    airport.board_passengers(&flight_id, capacity).unwrap();
    airport
        .set_flight_status(&flight_id, FlightStatus::Ready)
        .unwrap();
    airport.assign_runway_for_departure(&flight_id).unwrap();
}

pub fn arb_status() -> impl Strategy<Value = FlightStatus> {
    prop_oneof![
        Just(FlightStatus::Planned),
        Just(FlightStatus::Boarding),
        Just(FlightStatus::Ready),
        Just(FlightStatus::Taxi),
        Just(FlightStatus::Airborne),
        Just(FlightStatus::Landed),
        Just(FlightStatus::Cancelled),
    ]
}

pub fn arb_flight_number() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("AB123".to_string()),
        Just("AB124".to_string()),
        Just("CG900".to_string()),
    ]
}
