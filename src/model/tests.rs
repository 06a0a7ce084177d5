use super::{Candidate, CrewMember, CrewRole, Flight, Roster, Seniority, DRAFT_MENU};
use crate::seating::SeatClass;
use chrono::{Datelike, Timelike};

const FLIGHT_JSON: &str = r#"{
    "flightNumber": "TK1001",
    "dateTime": "2025-12-01T10:00:00",
    "durationMinutes": 240,
    "distanceKm": 2500,
    "source": {"code": "IST", "name": "Istanbul Airport", "city": "Istanbul", "country": "Turkey"},
    "destination": {"code": "LHR", "name": "London Heathrow", "city": "London", "country": "UK"},
    "vehicleType": {
        "id": 1,
        "modelName": "Boeing 737-800",
        "totalSeats": 162,
        "crewLimit": 10,
        "passengerLimit": 150,
        "seatingPlanConfig": "{\"sections\": [{\"className\": \"BUSINESS\", \"rows\": 3, \"layout\": [2, 2], \"letters\": \"ACDF\"},{\"className\": \"ECONOMY\", \"rows\": 25, \"layout\": [3, 3], \"letters\": \"ABCDEF\"}]}",
        "standardMenuDescription": "Chicken or Pasta"
    }
}"#;

#[test]
fn test_flight_from_service_record() {
    let flight: Flight = serde_json::from_str(FLIGHT_JSON).unwrap();
    assert_eq!(flight.flight_number(), "TK1001");
    assert_eq!(flight.source().code(), "IST");
    assert_eq!(flight.destination().name(), Some("London Heathrow"));
    assert_eq!(flight.distance_km(), 2500);
    assert_eq!(flight.date_time().hour(), 10);
    assert_eq!(flight.aircraft_name(), Some("Boeing 737-800"));
    let plan = flight.seating_plan();
    assert_eq!(plan.sections().len(), 2);
    assert_eq!(plan.sections()[0].class(), SeatClass::Business);
    assert_eq!(plan.total_rows(), 28);
}

#[test]
fn test_flight_created_in_browser_form() {
    let json = r#"{
        "flightNumber": "XY42",
        "source": {"code": "JFK"},
        "destination": "lax",
        "dateTime": "2026-01-15T08:30",
        "distanceKm": 3983,
        "vehicleType": {"modelName": "Embraer E195", "seatingPlanConfig": null, "standardMenuDescription": "Standard Menu"}
    }"#;
    let flight: Flight = serde_json::from_str(json).unwrap();
    assert_eq!(flight.destination().code(), "LAX");
    assert_eq!(flight.date_time().day(), 15);
    assert_eq!(flight.date_time().minute(), 30);
    assert!(flight.seating_plan().is_empty());
}

#[test]
fn test_malformed_seating_plan_is_empty() {
    let json = FLIGHT_JSON.replace("{\\\"sections\\\"", "{\\\"sections\\\" broken");
    let flight: Flight = serde_json::from_str(&json).unwrap();
    assert!(flight.seating_plan().is_empty());
}

#[test]
fn test_flight_round_trips_plan_as_string() {
    let flight: Flight = serde_json::from_str(FLIGHT_JSON).unwrap();
    let value = serde_json::to_value(&flight).unwrap();
    assert!(value["vehicleType"]["seatingPlanConfig"].is_string());
    let back: Flight = serde_json::from_value(value).unwrap();
    assert_eq!(back, flight);
}

#[test]
fn test_crew_member_wire_fields() {
    let json = r#"{
        "id": 7, "name": "Ayse Kaya", "age": 31, "gender": "F", "nationality": "TR",
        "type": "CHEF", "seniority": "JUNIOR",
        "languages": ["TR", "EN"],
        "allowedVehicles": ["Boeing 737-800", "Embraer E195"],
        "chefRecipes": ["Baklava"]
    }"#;
    let crew: CrewMember = serde_json::from_str(json).unwrap();
    assert_eq!(crew.id(), 7);
    assert_eq!(crew.role(), CrewRole::Chef);
    assert!(crew.is_chef());
    assert_eq!(crew.seniority(), Seniority::Junior);
    assert_eq!(crew.certified_types(), vec!["Boeing 737-800", "Embraer E195"]);
    let value = serde_json::to_value(&crew).unwrap();
    assert_eq!(value["type"], "CHEF");
    assert_eq!(value["seniority"], "JUNIOR");
}

#[test]
fn test_unknown_tags_fall_back() {
    assert_eq!(CrewRole::from("purser"), CrewRole::Regular);
    assert_eq!(Seniority::from("trainee"), Seniority::Unranked);
    assert_eq!(Seniority::from(" senior "), Seniority::Senior);
}

#[test]
fn test_saved_roster_payload() {
    let json = format!(
        r#"{{
            "flightId": "TK1001",
            "flightInfo": {FLIGHT_JSON},
            "pilots": [{{"id": 1, "name": "Cem", "seniorityLevel": "SENIOR", "allowedVehicleType": "Boeing 737-800", "allowedRangeKm": 9000}}],
            "cabinCrew": [],
            "passengers": [{{"id": 3, "name": "Jo", "seatType": "BUSINESS", "seatNumber": " 1A ", "autoAssigned": true}}],
            "menu": ["Chicken or Pasta", "Chef's Special: Baklava"],
            "generatedDate": 1764583200000
        }}"#
    );
    let roster: Roster = serde_json::from_str(&json).unwrap();
    assert_eq!(roster.flight_id(), "TK1001");
    assert_eq!(roster.pilots().len(), 1);
    assert_eq!(roster.pilots()[0].allowed_range_km(), 9000);
    assert_eq!(roster.passengers()[0].seat_number(), Some("1A"));
    assert!(roster.passengers()[0].is_auto_assigned());
    assert_eq!(roster.menu().len(), 2);
    assert!(roster.generated_date().is_some());
}

#[test]
fn test_draft_roster() {
    let flight: Flight = serde_json::from_str(FLIGHT_JSON).unwrap();
    let roster = Roster::draft(flight);
    assert_eq!(roster.flight_id(), "TK1001");
    assert!(roster.pilots().is_empty());
    assert!(roster.cabin_crew().is_empty());
    assert_eq!(roster.menu(), [DRAFT_MENU.to_string()]);
}
