//! Roster rules and the editing session built on them.

mod candidate_filter;
mod directory;
pub mod eligibility;
mod manifest;
mod permission;
mod session;
pub mod validator;

#[cfg(test)]
mod tests;

pub use candidate_filter::{Affordance, CandidateView, filter_candidates, filter_candidates_with};
pub use directory::CandidateDirectory;
pub use eligibility::{CertificationPolicy, ExactMatch, LooseSubstring, NonBlank, is_compatible};
pub use manifest::{ManifestRole, ManifestRow, build_manifest, menu_line};
pub use permission::{ADMIN_USER, Permission};
pub use session::{AddError, RosterEdits, RosterSession, RosterStatus, SaveError};
pub use validator::{Outcome, Rule, RuleCheck, ValidationResult, validate};
