use crate::error::{AirportError, Result};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

pub type AircraftId = Arc<str>;

/// Litres per 100 km a cargo aircraft burns before its efficiency factor.
pub const CARGO_BASE_CONSUMPTION_L_PER_100KM: f64 = 500.0;

const fn default_efficiency_factor() -> f64 {
    0.85
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineType {
    Jet,
    Turboprop,
    Piston,
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineType::Jet => write!(f, "Jet"),
            EngineType::Turboprop => write!(f, "Turboprop"),
            EngineType::Piston => write!(f, "Piston"),
        }
    }
}

/// What every aircraft variant can tell about itself.
pub trait Performance {
    /// Seats for passenger aircraft, kilograms of payload for freighters.
    fn capacity(&self) -> u32;

    fn calculate_range_km(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PassengerAircraft {
    pub seat_rows: u32,
    pub seats_per_row: u32,
    pub fuel_capacity_l: f64,
    pub avg_consumption_l_per_100km: f64,
}

impl Performance for PassengerAircraft {
    fn capacity(&self) -> u32 {
        self.seat_rows.saturating_mul(self.seats_per_row)
    }

    fn calculate_range_km(&self) -> f64 {
        if self.avg_consumption_l_per_100km <= 0.0 {
            return 0.0;
        }
        self.fuel_capacity_l / self.avg_consumption_l_per_100km * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CargoAircraft {
    pub cargo_volume_m3: f64,
    pub max_payload_kg: f64,
    pub fuel_capacity_l: f64,
    #[serde(default = "default_efficiency_factor")]
    pub efficiency_factor: f64,
}

impl Performance for CargoAircraft {
    fn capacity(&self) -> u32 {
        // float to int casts saturate, NaN becomes 0
        self.max_payload_kg.floor() as u32
    }

    fn calculate_range_km(&self) -> f64 {
        self.fuel_capacity_l / CARGO_BASE_CONSUMPTION_L_PER_100KM * self.efficiency_factor * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AircraftKind {
    Passenger(PassengerAircraft),
    Cargo(CargoAircraft),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Aircraft {
    pub id: AircraftId,
    pub model: String,
    pub registration: String,
    pub empty_weight_kg: f64,
    pub max_takeoff_weight_kg: f64,
    pub engine_type: EngineType,
    pub wingspan_m: f64,
    pub min_runway_length_m: u32,
    #[serde(flatten)]
    pub kind: AircraftKind,
}

impl Aircraft {
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| AirportError::InvalidAircraft {
            registration: self.registration.clone(),
            reason: reason.to_string(),
        };

        let weights = [self.empty_weight_kg, self.max_takeoff_weight_kg, self.wingspan_m];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(invalid("weights and wingspan must be non-negative"));
        }
        if self.max_takeoff_weight_kg < self.empty_weight_kg {
            return Err(invalid("max takeoff weight is below empty weight"));
        }
        Ok(())
    }

    pub fn is_passenger(&self) -> bool {
        matches!(self.kind, AircraftKind::Passenger(_))
    }

    pub fn is_cargo(&self) -> bool {
        matches!(self.kind, AircraftKind::Cargo(_))
    }
}

impl Performance for Aircraft {
    fn capacity(&self) -> u32 {
        match &self.kind {
            AircraftKind::Passenger(p) => p.capacity(),
            AircraftKind::Cargo(c) => c.capacity(),
        }
    }

    fn calculate_range_km(&self) -> f64 {
        match &self.kind {
            AircraftKind::Passenger(p) => p.calculate_range_km(),
            AircraftKind::Cargo(c) => c.calculate_range_km(),
        }
    }
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.registration, self.model)
    }
}
