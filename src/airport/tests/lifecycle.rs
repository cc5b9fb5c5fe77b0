use crate::airport::Airport;
use crate::error::{AirportError, EntityKind};
use crate::flight::FlightStatus::{
    Airborne, Boarding, Cancelled, Landed, Planned, Ready, Taxi,
};
use crate::gate::Gate;
use crate::runway::{Runway, RunwayStatus};
use crate::schedule::{SchedulerConfig, SimpleScheduler};
use crate::test_utils::{
    a320, advance_to, b747f, demo_airport, flight_with, id, ready_for_departure,
};

#[test]
fn test_depart_while_boarding() {
    let mut airport = demo_airport();
    airport.assign_gate(&id("FL_1")).unwrap();
    airport.assign_runway_for_departure(&id("FL_1")).unwrap();
    airport.set_flight_status(&id("FL_1"), Boarding).unwrap();

    assert_eq!(
        Err(AirportError::InvalidState {
            flight: id("FL_1"),
            status: Boarding,
            action: "depart",
        }),
        airport.depart(&id("FL_1"))
    );
    let flight = airport.find_flight(&id("FL_1")).unwrap();
    assert_eq!(Boarding, flight.status());
    assert!(flight.gate_id().is_some());
    assert!(flight.runway_id().is_some());
}

#[test]
fn test_depart_without_runway() {
    let mut airport = demo_airport();
    airport.assign_gate(&id("FL_1")).unwrap();
    airport.set_flight_status(&id("FL_1"), Boarding).unwrap();
    airport.set_flight_status(&id("FL_1"), Ready).unwrap();

    assert!(matches!(
        airport.depart(&id("FL_1")),
        Err(AirportError::InvalidState { status: Ready, .. })
    ));
}

#[test]
fn test_depart_frees_resources() {
    let mut airport = demo_airport();
    ready_for_departure(&mut airport, "FL_1");

    airport.depart(&id("FL_1")).unwrap();

    let flight = airport.find_flight(&id("FL_1")).unwrap();
    assert_eq!(Airborne, flight.status());
    assert_eq!(None, flight.gate_id());
    assert_eq!(None, flight.runway_id());
    assert!(airport.gates().all(|g| g.is_free()));
    assert!(airport.runways().all(|r| r.status() == RunwayStatus::Free));
}

#[test]
fn test_arrive_parks_at_gate() {
    let mut airport = demo_airport();
    ready_for_departure(&mut airport, "FL_1");
    airport.depart(&id("FL_1")).unwrap();

    let gate_id = airport.arrive(&id("FL_1")).unwrap();

    assert_eq!(id("G_A1"), gate_id);
    let flight = airport.find_flight(&id("FL_1")).unwrap();
    assert_eq!(Landed, flight.status());
    assert_eq!(Some(&gate_id), flight.gate_id());
    assert_eq!(None, flight.runway_id());
    assert_eq!(
        Some(&id("FL_1")),
        airport.gate(&gate_id).unwrap().occupied_by()
    );
    assert!(airport.runways().all(|r| r.is_available()));
}

#[test]
fn test_arrive_requires_airborne() {
    let mut airport = demo_airport();
    assert!(matches!(
        airport.arrive(&id("FL_1")),
        Err(AirportError::InvalidState { action: "arrive", .. })
    ));
}

#[test]
fn test_arrive_without_gate_changes_nothing() {
    let mut airport = Airport::new("Strip");
    airport.add_runway(Runway::new("RW_1", "09/27", 3000)).unwrap();
    airport
        .add_flight(flight_with("FL_1", "AB123", a320("A320_1")))
        .unwrap();
    advance_to(airport.flight_mut(&id("FL_1")).unwrap(), Airborne);

    assert!(matches!(
        airport.arrive(&id("FL_1")),
        Err(AirportError::NoGateAvailable { .. })
    ));
    let flight = airport.find_flight(&id("FL_1")).unwrap();
    assert_eq!(Airborne, flight.status());
    assert_eq!(None, flight.runway_id());
    assert!(airport.runway(&id("RW_1")).unwrap().is_available());
}

#[test]
fn test_arrive_without_runway() {
    let mut airport = Airport::new("Heliport");
    airport.add_gate(Gate::new("G_1", "1", 40.0)).unwrap();
    airport
        .add_flight(flight_with("FL_1", "AB123", a320("A320_1")))
        .unwrap();
    advance_to(airport.flight_mut(&id("FL_1")).unwrap(), Airborne);

    assert!(matches!(
        airport.arrive(&id("FL_1")),
        Err(AirportError::NoRunwayAvailable { .. })
    ));
    assert!(airport.gate(&id("G_1")).unwrap().is_free());
}

#[test]
fn test_cancel_releases_and_removes() {
    let mut airport = demo_airport();
    airport.assign_gate(&id("FL_1")).unwrap();
    airport.assign_runway_for_departure(&id("FL_1")).unwrap();

    let cancelled = airport.cancel_flight(&id("FL_1")).unwrap();

    assert_eq!(Cancelled, cancelled.status());
    assert_eq!(None, cancelled.gate_id());
    assert_eq!(None, cancelled.runway_id());
    assert!(!airport.schedule().contains(&id("FL_1")));
    assert!(airport.gates().all(|g| g.is_free()));
    assert!(airport.runways().all(|r| r.is_available()));
}

#[test]
fn test_cancel_landed_flight() {
    let mut airport = demo_airport();
    advance_to(airport.flight_mut(&id("FL_1")).unwrap(), Landed);

    assert!(matches!(
        airport.cancel_flight(&id("FL_1")),
        Err(AirportError::IllegalTransition { from: Landed, .. })
    ));
    assert!(airport.schedule().contains(&id("FL_1")));
}

#[test]
fn test_remove_unknown_flight() {
    let mut airport = demo_airport();
    assert!(matches!(
        airport.remove_flight(&id("FL_9")),
        Err(AirportError::NotFound {
            kind: EntityKind::Flight,
            ..
        })
    ));
}

#[test]
fn test_auto_ready_uses_airport_scheduler() {
    let scheduler = SimpleScheduler::new(SchedulerConfig::new(0.5).unwrap());
    let mut airport = Airport::with_scheduler("Demo", scheduler);
    airport
        .add_flight(flight_with("FL_1", "AB123", a320("A320_1")))
        .unwrap();
    airport.set_flight_status(&id("FL_1"), Boarding).unwrap();
    airport.board_passengers(&id("FL_1"), 90).unwrap();

    assert_eq!(vec![id("FL_1")], airport.auto_ready().unwrap());
    assert_eq!(Ready, airport.find_flight(&id("FL_1")).unwrap().status());
}

#[test]
fn test_full_turnaround() {
    let mut airport = demo_airport();

    airport.assign_gate(&id("FL_1")).unwrap();
    airport.set_flight_status(&id("FL_1"), Boarding).unwrap();
    airport.board_passengers(&id("FL_1"), 100).unwrap();
    assert!(airport.auto_ready().unwrap().is_empty());

    airport.board_passengers(&id("FL_1"), 80).unwrap();
    assert_eq!(vec![id("FL_1")], airport.auto_ready().unwrap());

    airport.assign_runway_for_departure(&id("FL_1")).unwrap();
    airport.depart(&id("FL_1")).unwrap();
    airport.arrive(&id("FL_1")).unwrap();

    assert_eq!(Landed, airport.find_flight(&id("FL_1")).unwrap().status());
}

#[test]
fn test_cancelled_status_frees_gate_then_cancel_succeeds() {
    let mut airport = demo_airport();
    airport.assign_gate(&id("FL_1")).unwrap();
    airport.assign_runway_for_departure(&id("FL_1")).unwrap();

    airport.set_flight_status(&id("FL_1"), Cancelled).unwrap();

    let flight = airport.find_flight(&id("FL_1")).unwrap();
    assert_eq!(Cancelled, flight.status());
    assert_eq!(None, flight.gate_id());
    assert_eq!(None, flight.runway_id());
    assert!(airport.gates().all(|g| g.is_free()));
    assert!(airport.runways().all(|r| r.is_available()));

    let removed = airport.cancel_flight(&id("FL_1")).unwrap();
    assert_eq!(Cancelled, removed.status());
    assert!(!airport.schedule().contains(&id("FL_1")));
}

#[test]
fn test_movement_statuses_refused_outside_depart_and_arrive() {
    let mut airport = demo_airport();
    ready_for_departure(&mut airport, "FL_1");

    for status in [Taxi, Airborne, Landed] {
        assert_eq!(
            Err(AirportError::InvalidState {
                flight: id("FL_1"),
                status: Ready,
                action: "move without depart or arrive",
            }),
            airport.set_flight_status(&id("FL_1"), status)
        );
    }
    let flight = airport.find_flight(&id("FL_1")).unwrap();
    assert_eq!(Ready, flight.status());
    assert!(flight.gate_id().is_some());
    assert!(flight.runway_id().is_some());
}

#[test]
fn test_skipping_boarding_is_illegal() {
    let mut airport = demo_airport();
    assert!(matches!(
        airport.set_flight_status(&id("FL_1"), Ready),
        Err(AirportError::IllegalTransition {
            from: Planned,
            to: Ready,
            ..
        })
    ));
}

#[test]
fn test_cargo_loaded_through_airport() {
    let mut airport = demo_airport();
    airport.set_flight_status(&id("FL_2"), Boarding).unwrap();

    assert!(matches!(
        airport.board_passengers(&id("FL_2"), 1),
        Err(AirportError::WrongAircraftKind { .. })
    ));
    airport.load_cargo(&id("FL_2"), 130_000.0).unwrap();

    assert_eq!(vec![id("FL_2")], airport.auto_ready().unwrap());
}

#[test]
fn test_arrive_with_held_runway_releases_it() {
    let mut airport = Airport::new("Strip");
    airport.add_gate(Gate::new("G_1", "1", 80.0)).unwrap();
    airport.add_runway(Runway::new("RW_1", "09/27", 3800)).unwrap();
    airport.add_runway(Runway::new("RW_2", "18/36", 3800)).unwrap();
    airport
        .add_flight(flight_with("FL_1", "CG900", b747f("B747_1")))
        .unwrap();
    airport.assign_runway_for_departure(&id("FL_1")).unwrap();
    advance_to(airport.flight_mut(&id("FL_1")).unwrap(), Airborne);

    airport.arrive(&id("FL_1")).unwrap();

    let flight = airport.find_flight(&id("FL_1")).unwrap();
    assert_eq!(Landed, flight.status());
    assert_eq!(None, flight.runway_id());
    for runway in airport.runways() {
        assert_eq!(RunwayStatus::Free, runway.status(), "runway {}", runway.id);
        assert_eq!(None, runway.current_flight());
    }
}
