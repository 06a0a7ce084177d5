use crate::model::{Candidate, CrewMember, Pilot};

/// Pilots and cabin crew the service offered for the current flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateDirectory {
    pilots: Vec<Pilot>,
    crew: Vec<CrewMember>,
}

impl CandidateDirectory {
    pub fn new(pilots: Vec<Pilot>, crew: Vec<CrewMember>) -> Self { Self { pilots, crew } }

    pub fn pilots(&self) -> &[Pilot] { &self.pilots }
    pub fn crew(&self) -> &[CrewMember] { &self.crew }

    pub fn pilot(&self, id: u64) -> Option<&Pilot> { self.pilots.iter().find(|p| p.id() == id) }
    pub fn crew_member(&self, id: u64) -> Option<&CrewMember> { self.crew.iter().find(|c| c.id() == id) }
}
