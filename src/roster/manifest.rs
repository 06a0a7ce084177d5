use crate::model::{Candidate, Roster};
use itertools::Itertools;
use strum_macros::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ManifestRole {
    Pilot,
    #[strum(serialize = "Cabin Crew")]
    CabinCrew,
    Passenger,
}

/// One line of the combined crew and passenger manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRow {
    pub role: ManifestRole,
    pub id: u64,
    pub name: String,
    /// Seniority for crew, seat number for passengers.
    pub rank: String,
    pub nationality: String,
    /// Spoken languages for crew, seat class for passengers.
    pub info: String,
}

/// Manifest rows: pilots, then cabin crew, then passengers, each in roster order.
pub fn build_manifest(roster: &Roster) -> Vec<ManifestRow> {
    let pilots = roster.pilots().iter().map(|p| ManifestRow {
        role: ManifestRole::Pilot,
        id: p.id(),
        name: p.name().to_string(),
        rank: p.seniority().to_string(),
        nationality: p.nationality().to_string(),
        info: p.languages().join(", "),
    });
    let crew = roster.cabin_crew().iter().map(|c| ManifestRow {
        role: ManifestRole::CabinCrew,
        id: c.id(),
        name: c.name().to_string(),
        rank: c.seniority().to_string(),
        nationality: c.nationality().to_string(),
        info: c.languages().join(", "),
    });
    let passengers = roster.passengers().iter().map(|p| ManifestRow {
        role: ManifestRole::Passenger,
        id: p.id(),
        name: p.name().to_string(),
        rank: p.seat_number().unwrap_or("Unassigned").to_string(),
        nationality: p.nationality().to_string(),
        info: p.seat_type().to_string(),
    });
    pilots.chain(crew).chain(passengers).collect()
}

/// Menu items joined for display, `None` when the roster has no menu.
pub fn menu_line(roster: &Roster) -> Option<String> {
    if roster.menu().is_empty() {
        None
    } else {
        Some(roster.menu().iter().join(" + "))
    }
}
