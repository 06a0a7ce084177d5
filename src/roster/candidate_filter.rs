use super::eligibility::{CertificationPolicy, LooseSubstring};
use super::permission::Permission;
use crate::model::Candidate;
use itertools::Itertools;
use std::collections::HashSet;

/// What the user can do with a listed candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Affordance {
    Addable,
    /// Not certified for the aircraft; the reason is meant for the user.
    Blocked { reason: String },
    /// The user has no edit permission.
    ReadOnly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateView<'a, C> {
    candidate: &'a C,
    affordance: Affordance,
}

impl<'a, C> CandidateView<'a, C> {
    pub fn candidate(&self) -> &'a C { self.candidate }
    pub fn affordance(&self) -> &Affordance { &self.affordance }
    pub fn is_addable(&self) -> bool { self.affordance == Affordance::Addable }
}

/// Reason shown when a candidate lacks the certification for `aircraft`.
pub fn not_certified_reason<C: Candidate>(candidate: &C, aircraft: &str) -> String {
    let certified = candidate.certified_types();
    let listed = if certified.is_empty() { String::from("none") } else { certified.iter().join(", ") };
    format!("{} is not certified for {aircraft}. Certified for: {listed}", candidate.name())
}

/// Candidates that are not yet selected, annotated with what the user can do
/// with them. Selected candidates (by id) are left out entirely.
pub fn filter_candidates<'a, C: Candidate>(
    directory: &'a [C],
    selected: &[C],
    aircraft: &str,
    permission: Permission,
) -> Vec<CandidateView<'a, C>> {
    filter_candidates_with(&LooseSubstring, directory, selected, aircraft, permission)
}

pub fn filter_candidates_with<'a, C: Candidate, P: CertificationPolicy>(
    policy: &P,
    directory: &'a [C],
    selected: &[C],
    aircraft: &str,
    permission: Permission,
) -> Vec<CandidateView<'a, C>> {
    let taken: HashSet<u64> = selected.iter().map(Candidate::id).collect();
    directory
        .iter()
        .filter(|c| !taken.contains(&c.id()))
        .map(|candidate| {
            let affordance = if !permission.can_edit() {
                Affordance::ReadOnly
            } else if policy.is_compatible(&candidate.certified_types(), aircraft) {
                Affordance::Addable
            } else {
                Affordance::Blocked { reason: not_certified_reason(candidate, aircraft) }
            };
            CandidateView { candidate, affordance }
        })
        .collect()
}
