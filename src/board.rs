use crate::aircraft::Performance;
use crate::airport::Airport;
use crate::flight::{Flight, FlightStatus};
use crate::gate::Gate;
use crate::runway::{Runway, RunwayStatus};
use colored::Colorize;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
pub struct FlightRow {
    #[tabled(rename = "Flight")]
    pub number: String,
    #[tabled(rename = "Route")]
    pub route: String,
    #[tabled(rename = "Departure")]
    pub departure: String,
    #[tabled(rename = "Aircraft")]
    pub aircraft: String,
    #[tabled(rename = "Load")]
    pub load: String,
    #[tabled(rename = "Gate")]
    pub gate: String,
    #[tabled(rename = "Runway")]
    pub runway: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl From<&Flight> for FlightRow {
    fn from(flight: &Flight) -> Self {
        let aircraft = flight.aircraft();
        let load = if aircraft.is_passenger() {
            format!("{}/{}", flight.passengers_checked_in(), aircraft.capacity())
        } else {
            format!("{:.0}/{} kg", flight.cargo_loaded_kg(), aircraft.capacity())
        };
        FlightRow {
            number: flight.flight_number.clone(),
            route: format!("{}->{}", flight.origin, flight.destination),
            departure: flight.planned_departure.to_string(),
            aircraft: aircraft.to_string(),
            load,
            gate: or_dash(flight.gate_id()),
            runway: or_dash(flight.runway_id()),
            status: paint_flight_status(flight.status()),
        }
    }
}

#[derive(Tabled)]
pub struct GateRow {
    #[tabled(rename = "Gate")]
    pub name: String,
    #[tabled(rename = "Max wingspan")]
    pub max_wingspan: String,
    #[tabled(rename = "Occupied by")]
    pub occupied_by: String,
}

impl From<&Gate> for GateRow {
    fn from(gate: &Gate) -> Self {
        GateRow {
            name: gate.name.clone(),
            max_wingspan: format!("{} m", gate.max_wingspan_m),
            occupied_by: or_dash(gate.occupied_by()),
        }
    }
}

#[derive(Tabled)]
pub struct RunwayRow {
    #[tabled(rename = "Runway")]
    pub name: String,
    #[tabled(rename = "Length")]
    pub length: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Flight")]
    pub flight: String,
}

impl From<&Runway> for RunwayRow {
    fn from(runway: &Runway) -> Self {
        let status = match runway.status() {
            RunwayStatus::Free => runway.status().to_string().green(),
            RunwayStatus::InUse => runway.status().to_string().yellow(),
            RunwayStatus::Maintenance => runway.status().to_string().red(),
        };
        RunwayRow {
            name: runway.name.clone(),
            length: format!("{} m", runway.length_m),
            status: status.to_string(),
            flight: or_dash(runway.current_flight()),
        }
    }
}

pub fn flights_table(airport: &Airport) -> String {
    render(airport.schedule().iter().map(FlightRow::from))
}

pub fn gates_table(airport: &Airport) -> String {
    render(airport.gates().map(GateRow::from))
}

pub fn runways_table(airport: &Airport) -> String {
    render(airport.runways().map(RunwayRow::from))
}

fn render<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}

fn paint_flight_status(status: FlightStatus) -> String {
    let label = status.to_string();
    match status {
        FlightStatus::Planned => label.as_str().normal(),
        FlightStatus::Boarding | FlightStatus::Ready => label.as_str().yellow(),
        FlightStatus::Taxi | FlightStatus::Airborne => label.as_str().cyan(),
        FlightStatus::Landed => label.as_str().green(),
        FlightStatus::Cancelled => label.as_str().red(),
    }
    .to_string()
}

fn or_dash(value: Option<&std::sync::Arc<str>>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
