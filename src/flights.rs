//! Flight creation and the flight list shown before a roster is opened.

use crate::geo;
use crate::model::{Airport, Flight, VehicleType};
use crate::seating::SeatingPlan;
use chrono::NaiveDateTime;
use std::collections::HashSet;
use std::fmt;

/// Menu attached to flights created on the client.
pub const DEFAULT_MENU: &str = "Standard Menu";

/// Uppercases and strips all whitespace: `"tk 1001"` becomes `"TK1001"`.
pub fn normalize_flight_number(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_uppercase).collect()
}

/// Input of the flight creation form.
#[derive(Debug, Clone, Default)]
pub struct FlightDraft {
    pub flight_number: String,
    pub source: String,
    pub destination: String,
    pub date_time: Option<NaiveDateTime>,
    pub vehicle_type: String,
    /// Overrides the computed distance when set.
    pub distance_km: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlightDraftError {
    MissingField(&'static str),
    InvalidFlightNumber(String),
    /// Source and destination coincide or are not in the airport catalogue.
    NoDistance { source: String, destination: String },
}

impl fmt::Display for FlightDraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightDraftError::MissingField(field) => write!(f, "Please fill all fields ({field} is missing)"),
            FlightDraftError::InvalidFlightNumber(n) => write!(f, "flight number {n:?} must be letters and digits"),
            FlightDraftError::NoDistance { source, destination } => {
                write!(f, "cannot compute a distance from {source} to {destination}")
            }
        }
    }
}

impl std::error::Error for FlightDraftError {}

/// Builds a flight record from the creation form.
///
/// The seating plan is taken from the built-in layouts and is empty for
/// unknown aircraft types.
pub fn create_flight(draft: &FlightDraft) -> Result<Flight, FlightDraftError> {
    let flight_number = normalize_flight_number(&draft.flight_number);
    if flight_number.is_empty() {
        return Err(FlightDraftError::MissingField("flight number"));
    }
    if !flight_number.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(FlightDraftError::InvalidFlightNumber(flight_number));
    }
    let vehicle = draft.vehicle_type.trim();
    if vehicle.is_empty() {
        return Err(FlightDraftError::MissingField("vehicle type"));
    }
    let date_time = draft.date_time.ok_or(FlightDraftError::MissingField("date"))?;
    let distance_km = match draft.distance_km {
        Some(km) => km,
        None => geo::distance_between(&draft.source, &draft.destination).ok_or_else(|| {
            FlightDraftError::NoDistance {
                source: draft.source.clone(),
                destination: draft.destination.clone(),
            }
        })?,
    };
    let plan = SeatingPlan::builtin(vehicle).unwrap_or_else(|| {
        crate::warn!("No seating layout known for {vehicle}, flight {flight_number} gets an empty cabin");
        SeatingPlan::default()
    });
    Ok(Flight::new(
        &flight_number,
        Airport::from_code(&draft.source),
        Airport::from_code(&draft.destination),
        date_time,
        distance_km,
        VehicleType::new(vehicle, plan, DEFAULT_MENU),
    ))
}

/// Service flights first, then local flights the service does not know yet.
pub fn merge_flights(service: Vec<Flight>, local: &[Flight]) -> Vec<Flight> {
    let known: HashSet<String> = service.iter().map(|f| normalize_flight_number(f.flight_number())).collect();
    let unsaved: Vec<Flight> = local
        .iter()
        .filter(|f| !known.contains(&normalize_flight_number(f.flight_number())))
        .cloned()
        .collect();
    service.into_iter().chain(unsaved).collect()
}

/// Flights whose number contains `term`, ignoring case and surrounding space.
pub fn filter_flights<'a>(flights: &'a [Flight], term: &str) -> Vec<&'a Flight> {
    let term = term.trim().to_uppercase();
    flights.iter().filter(|f| f.flight_number().to_uppercase().contains(&term)).collect()
}
