use super::{Candidate, CrewMember, Flight, Passenger, Pilot, wire_time};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Menu a draft roster starts with until a chef is chosen.
pub const DRAFT_MENU: &str = "Standard Menu (Pending Chef Selection)";

/// The roster aggregate of one flight, in the shape the roster service stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    #[serde(default)]
    flight_id: String,
    flight_info: Flight,
    #[serde(default)]
    pilots: Vec<Pilot>,
    #[serde(default)]
    cabin_crew: Vec<CrewMember>,
    #[serde(default)]
    passengers: Vec<Passenger>,
    #[serde(default)]
    menu: Vec<String>,
    #[serde(
        default,
        serialize_with = "wire_time::serialize_generated",
        deserialize_with = "wire_time::deserialize_generated"
    )]
    generated_date: Option<DateTime<Utc>>,
}

impl Roster {
    /// Empty roster for a flight that has nothing saved yet.
    pub fn draft(flight: Flight) -> Self {
        Self {
            flight_id: flight.flight_number().to_string(),
            flight_info: flight,
            pilots: Vec::new(),
            cabin_crew: Vec::new(),
            passengers: Vec::new(),
            menu: vec![DRAFT_MENU.to_string()],
            generated_date: Some(Utc::now()),
        }
    }

    /// Flight identifier, falling back to the flight number of the embedded record.
    pub fn flight_id(&self) -> &str {
        if self.flight_id.is_empty() {
            self.flight_info.flight_number()
        } else {
            &self.flight_id
        }
    }

    pub fn flight(&self) -> &Flight { &self.flight_info }
    pub fn pilots(&self) -> &[Pilot] { &self.pilots }
    pub fn cabin_crew(&self) -> &[CrewMember] { &self.cabin_crew }
    pub fn passengers(&self) -> &[Passenger] { &self.passengers }
    pub fn menu(&self) -> &[String] { &self.menu }
    pub fn generated_date(&self) -> Option<DateTime<Utc>> { self.generated_date }

    pub fn has_pilot(&self, id: u64) -> bool { self.pilots.iter().any(|p| p.id() == id) }
    pub fn has_crew(&self, id: u64) -> bool { self.cabin_crew.iter().any(|c| c.id() == id) }

    pub(crate) fn push_pilot(&mut self, pilot: Pilot) { self.pilots.push(pilot); }
    pub(crate) fn push_crew(&mut self, crew: CrewMember) { self.cabin_crew.push(crew); }

    pub(crate) fn remove_pilot(&mut self, id: u64) -> Option<Pilot> {
        let pos = self.pilots.iter().position(|p| p.id() == id)?;
        Some(self.pilots.remove(pos))
    }

    pub(crate) fn remove_crew(&mut self, id: u64) -> Option<CrewMember> {
        let pos = self.cabin_crew.iter().position(|c| c.id() == id)?;
        Some(self.cabin_crew.remove(pos))
    }

    /// Drops duplicate ids from the selections, keeping first occurrences.
    pub(crate) fn dedup_selections(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.pilots.retain(|p| seen.insert(p.id()));
        seen.clear();
        self.cabin_crew.retain(|c| seen.insert(c.id()));
    }

    /// Rewrites the identifiers to the normalized flight number.
    pub(crate) fn normalize_ids(&mut self, flight_number: &str) {
        self.flight_id = flight_number.to_string();
        self.flight_info.set_flight_number(flight_number.to_string());
    }

    #[cfg(test)]
    pub(crate) fn with_passengers(mut self, passengers: Vec<Passenger>) -> Self {
        self.passengers = passengers;
        self
    }
}
