//! Records exchanged with the roster service.

mod flight;
mod passenger;
mod person;
mod roster;
pub mod wire_time;

#[cfg(test)]
mod tests;

pub use flight::{Airport, Flight, SharedFlightDetails, VehicleType};
pub use passenger::Passenger;
pub use person::{Candidate, CrewMember, CrewRole, Pilot, Seniority};
pub use roster::{DRAFT_MENU, Roster};
