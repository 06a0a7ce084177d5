use super::candidate_filter::{CandidateView, filter_candidates, not_certified_reason};
use super::directory::CandidateDirectory;
use super::eligibility::is_compatible;
use super::manifest::{ManifestRow, build_manifest, menu_line};
use super::permission::Permission;
use super::validator::{ValidationResult, validate};
use crate::flights::normalize_flight_number;
use crate::model::{Candidate, CrewMember, Pilot, Roster};
use crate::seating::SeatMap;
use std::{fmt, fs, io, path::Path};

/// Where the roster being edited came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterStatus {
    /// Loaded from the roster service.
    Saved,
    /// Nothing saved yet, started empty.
    Draft,
}

/// Editing state of one flight's roster.
///
/// Owns the roster, the candidate directory and the validation result of the
/// current selections; the result is recomputed on every add or remove.
#[derive(Debug, Clone)]
pub struct RosterSession {
    roster: Roster,
    status: RosterStatus,
    directory: CandidateDirectory,
    permission: Permission,
    validation: ValidationResult,
}

impl RosterSession {
    pub fn new(mut roster: Roster, status: RosterStatus, directory: CandidateDirectory, permission: Permission) -> Self {
        roster.dedup_selections();
        let validation = validate(roster.pilots(), roster.cabin_crew());
        Self { roster, status, directory, permission, validation }
    }

    pub fn roster(&self) -> &Roster { &self.roster }
    pub fn status(&self) -> RosterStatus { self.status }
    pub fn directory(&self) -> &CandidateDirectory { &self.directory }
    pub fn permission(&self) -> Permission { self.permission }
    pub fn validation(&self) -> &ValidationResult { &self.validation }
    pub fn can_save(&self) -> bool { self.permission.can_edit() && self.validation.satisfied() }

    /// Aircraft model of the flight, `"Unknown"` when the flight has none.
    pub fn aircraft(&self) -> &str { self.roster.flight().aircraft_name().unwrap_or("Unknown") }

    pub fn title(&self) -> String {
        let state = match self.status {
            RosterStatus::Saved => "Saved",
            RosterStatus::Draft => "Draft",
        };
        format!("{} - Roster Details ({state})", self.roster.flight_id())
    }

    pub fn pilot_candidates(&self) -> Vec<CandidateView<'_, Pilot>> {
        filter_candidates(self.directory.pilots(), self.roster.pilots(), self.aircraft(), self.permission)
    }

    pub fn crew_candidates(&self) -> Vec<CandidateView<'_, CrewMember>> {
        filter_candidates(self.directory.crew(), self.roster.cabin_crew(), self.aircraft(), self.permission)
    }

    fn admit<C: Candidate>(&self, candidate: &C, already_selected: bool) -> Result<(), AddError> {
        if !self.permission.can_edit() {
            return Err(AddError::ReadOnly);
        }
        if already_selected {
            return Err(AddError::AlreadySelected(candidate.id()));
        }
        if !is_compatible(&candidate.certified_types(), self.aircraft()) {
            return Err(AddError::NotCertified(not_certified_reason(candidate, self.aircraft())));
        }
        Ok(())
    }

    /// Adds the directory pilot `id` to the roster.
    pub fn add_pilot(&mut self, id: u64) -> Result<(), AddError> {
        let pilot = self.directory.pilot(id).ok_or(AddError::UnknownCandidate(id))?;
        self.admit(pilot, self.roster.has_pilot(id))?;
        let pilot = pilot.clone();
        crate::event!("Adding pilot {} ({}) to {}", pilot.name(), pilot.seniority(), self.roster.flight_id());
        self.roster.push_pilot(pilot);
        self.revalidate();
        Ok(())
    }

    /// Adds the directory crew member `id` to the roster.
    pub fn add_crew(&mut self, id: u64) -> Result<(), AddError> {
        let crew = self.directory.crew_member(id).ok_or(AddError::UnknownCandidate(id))?;
        self.admit(crew, self.roster.has_crew(id))?;
        let crew = crew.clone();
        crate::event!("Adding crew {} ({}, {}) to {}", crew.name(), crew.role(), crew.seniority(), self.roster.flight_id());
        self.roster.push_crew(crew);
        self.revalidate();
        Ok(())
    }

    /// Removes pilot `id`; returns whether it was selected.
    pub fn remove_pilot(&mut self, id: u64) -> Result<bool, AddError> {
        if !self.permission.can_edit() {
            return Err(AddError::ReadOnly);
        }
        let removed = self.roster.remove_pilot(id).is_some();
        self.revalidate();
        Ok(removed)
    }

    /// Removes crew member `id`; returns whether it was selected.
    pub fn remove_crew(&mut self, id: u64) -> Result<bool, AddError> {
        if !self.permission.can_edit() {
            return Err(AddError::ReadOnly);
        }
        let removed = self.roster.remove_crew(id).is_some();
        self.revalidate();
        Ok(removed)
    }

    /// Applies a batch of selection changes, removals first, stopping at the
    /// first refused addition.
    pub fn apply(&mut self, edits: &RosterEdits) -> Result<(), AddError> {
        for &id in &edits.drop_pilots {
            if !self.remove_pilot(id)? {
                crate::warn!("Pilot {id} is not on the roster of {}", self.roster.flight_id());
            }
        }
        for &id in &edits.drop_crew {
            if !self.remove_crew(id)? {
                crate::warn!("Crew member {id} is not on the roster of {}", self.roster.flight_id());
            }
        }
        for &id in &edits.add_pilots {
            self.add_pilot(id)?;
        }
        for &id in &edits.add_crew {
            self.add_crew(id)?;
        }
        Ok(())
    }

    fn revalidate(&mut self) {
        self.validation = validate(self.roster.pilots(), self.roster.cabin_crew());
        crate::event!(
            "Roster {} validation: {}",
            self.roster.flight_id(),
            if self.validation.satisfied() { "satisfied" } else { "violations pending" }
        );
    }

    pub fn seat_map(&self) -> SeatMap { SeatMap::build(&self.roster.flight().seating_plan(), self.roster.passengers()) }
    pub fn manifest(&self) -> Vec<ManifestRow> { build_manifest(&self.roster) }
    pub fn menu_line(&self) -> Option<String> { menu_line(&self.roster) }

    /// Roster ready to be sent to the service.
    ///
    /// # Errors
    /// Refuses when the user may not edit or the roster breaks a staffing rule;
    /// the payload is never produced for an invalid roster.
    pub fn save_payload(&self) -> Result<Roster, SaveError> {
        if !self.permission.can_edit() {
            return Err(SaveError::ReadOnly);
        }
        if !self.validation.satisfied() {
            return Err(SaveError::RosterInvalid(self.validation.violations().map(String::from).collect()));
        }
        let mut payload = self.roster.clone();
        let flight_id = normalize_flight_number(self.roster.flight_id());
        payload.normalize_ids(&flight_id);
        Ok(payload)
    }

    /// Writes the roster as pretty printed JSON.
    pub fn export_json(&self, path: &Path) -> io::Result<()> {
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(io::BufWriter::new(file), &self.roster)?;
        Ok(())
    }
}

/// Selection changes requested in one go, by directory id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterEdits {
    pub add_pilots: Vec<u64>,
    pub add_crew: Vec<u64>,
    pub drop_pilots: Vec<u64>,
    pub drop_crew: Vec<u64>,
}

impl RosterEdits {
    pub fn is_empty(&self) -> bool {
        self.add_pilots.is_empty() && self.add_crew.is_empty() && self.drop_pilots.is_empty() && self.drop_crew.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddError {
    UnknownCandidate(u64),
    AlreadySelected(u64),
    NotCertified(String),
    ReadOnly,
}

impl fmt::Display for AddError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddError::UnknownCandidate(id) => write!(f, "no candidate with id {id}"),
            AddError::AlreadySelected(id) => write!(f, "candidate {id} is already on the roster"),
            AddError::NotCertified(reason) => write!(f, "Cannot add crew member: {reason}"),
            AddError::ReadOnly => write!(f, "roster is read only for this user"),
        }
    }
}

impl std::error::Error for AddError {}

#[derive(Debug)]
pub enum SaveError {
    ReadOnly,
    /// Staffing rules are broken; carries the violation messages.
    RosterInvalid(Vec<String>),
    /// The service refused the roster, carrying its reason.
    Rejected(String),
    Transport(crate::http_handler::HTTPError),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::ReadOnly => write!(f, "only the admin user can save rosters"),
            SaveError::RosterInvalid(violations) => {
                write!(f, "Cannot save: roster requirements are not met: {}", violations.join("; "))
            }
            SaveError::Rejected(reason) => write!(f, "Save failed: {reason}"),
            SaveError::Transport(e) => write!(f, "Save error: {e}"),
        }
    }
}

impl std::error::Error for SaveError {}
