use super::wire_time;
use crate::seating::{SeatingPlan, plan::config_field};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Airport as referenced by a flight. The service sends either a full record
/// or just the IATA code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AirportWire")]
pub struct Airport {
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AirportWire {
    Code(String),
    Record {
        code: String,
        name: Option<String>,
        city: Option<String>,
        country: Option<String>,
    },
}

impl From<AirportWire> for Airport {
    fn from(value: AirportWire) -> Self {
        match value {
            AirportWire::Code(code) => Airport::from_code(&code),
            AirportWire::Record { code, name, city, country } => Airport { code, name, city, country },
        }
    }
}

impl Airport {
    pub fn from_code(code: &str) -> Self {
        Self { code: code.trim().to_uppercase(), name: None, city: None, country: None }
    }

    pub fn code(&self) -> &str { &self.code }
    pub fn name(&self) -> Option<&str> { self.name.as_deref() }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleType {
    model_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_seats: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    crew_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    passenger_limit: Option<u32>,
    #[serde(default, with = "config_field")]
    seating_plan_config: SeatingPlan,
    #[serde(default)]
    standard_menu_description: String,
}

impl VehicleType {
    pub fn new(model_name: &str, seating_plan: SeatingPlan, menu: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            total_seats: None,
            crew_limit: None,
            passenger_limit: None,
            seating_plan_config: seating_plan,
            standard_menu_description: menu.to_string(),
        }
    }

    pub fn model_name(&self) -> &str { &self.model_name }
    pub fn seating_plan(&self) -> &SeatingPlan { &self.seating_plan_config }
    pub fn standard_menu(&self) -> &str { &self.standard_menu_description }
    pub fn crew_limit(&self) -> Option<u32> { self.crew_limit }
    pub fn passenger_limit(&self) -> Option<u32> { self.passenger_limit }
}

/// Code-share information the flight service attaches to some flights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedFlightDetails {
    #[serde(default)]
    local_flight_number: Option<String>,
    #[serde(default)]
    partner_company_name: Option<String>,
    #[serde(default)]
    partner_flight_number: Option<String>,
    #[serde(default)]
    connecting_flight_info: Option<String>,
}

impl SharedFlightDetails {
    pub fn partner_company_name(&self) -> Option<&str> { self.partner_company_name.as_deref() }
    pub fn partner_flight_number(&self) -> Option<&str> { self.partner_flight_number.as_deref() }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    flight_number: String,
    source: Airport,
    destination: Airport,
    #[serde(with = "wire_time::local")]
    date_time: NaiveDateTime,
    #[serde(default)]
    duration_minutes: u32,
    #[serde(default)]
    distance_km: u32,
    #[serde(default)]
    vehicle_type: Option<VehicleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shared_details: Option<SharedFlightDetails>,
}

impl Flight {
    pub fn new(
        flight_number: &str,
        source: Airport,
        destination: Airport,
        date_time: NaiveDateTime,
        distance_km: u32,
        vehicle_type: VehicleType,
    ) -> Self {
        Self {
            flight_number: flight_number.to_string(),
            source,
            destination,
            date_time,
            duration_minutes: 0,
            distance_km,
            vehicle_type: Some(vehicle_type),
            shared_details: None,
        }
    }

    pub fn flight_number(&self) -> &str { &self.flight_number }
    pub fn source(&self) -> &Airport { &self.source }
    pub fn destination(&self) -> &Airport { &self.destination }
    pub fn date_time(&self) -> NaiveDateTime { self.date_time }
    pub fn distance_km(&self) -> u32 { self.distance_km }
    pub fn duration_minutes(&self) -> u32 { self.duration_minutes }
    pub fn vehicle_type(&self) -> Option<&VehicleType> { self.vehicle_type.as_ref() }
    pub fn shared_details(&self) -> Option<&SharedFlightDetails> { self.shared_details.as_ref() }

    /// Aircraft model name, or `None` when the record carries no vehicle type.
    pub fn aircraft_name(&self) -> Option<&str> { self.vehicle_type.as_ref().map(VehicleType::model_name) }

    /// Seating plan of the aircraft; empty when the vehicle type is missing.
    pub fn seating_plan(&self) -> SeatingPlan {
        self.vehicle_type.as_ref().map(|v| v.seating_plan().clone()).unwrap_or_default()
    }

    pub(crate) fn set_flight_number(&mut self, flight_number: String) { self.flight_number = flight_number; }
}
