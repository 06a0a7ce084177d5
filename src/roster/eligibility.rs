//! Aircraft certification matching.
//!
//! The roster service names aircraft types inconsistently ("E195" versus
//! "Embraer E195"), so the default policy is a case-insensitive substring match
//! in either direction. It accepts false positives such as "737" matching both
//! "737-800" and "737-900".

/// Decides whether one certification string covers an aircraft type name.
pub trait CertificationPolicy {
    fn covers(&self, certified: &str, aircraft: &str) -> bool;

    /// True iff any entry of `certified` covers `aircraft`. An empty list never does.
    fn is_compatible<S: AsRef<str>>(&self, certified: &[S], aircraft: &str) -> bool {
        certified.iter().any(|c| self.covers(c.as_ref(), aircraft))
    }
}

/// Bidirectional, case-insensitive substring match.
#[derive(Debug, Default, Clone, Copy)]
pub struct LooseSubstring;

impl CertificationPolicy for LooseSubstring {
    fn covers(&self, certified: &str, aircraft: &str) -> bool {
        let certified = certified.to_lowercase();
        let aircraft = aircraft.to_lowercase();
        aircraft.contains(&certified) || certified.contains(&aircraft)
    }
}

/// Case-insensitive equality.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactMatch;

impl CertificationPolicy for ExactMatch {
    fn covers(&self, certified: &str, aircraft: &str) -> bool {
        certified.to_lowercase() == aircraft.to_lowercase()
    }
}

/// Wraps another policy and ignores blank certification entries and blank
/// aircraft names, which the loose policy would match against anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonBlank<P>(pub P);

impl<P: CertificationPolicy> CertificationPolicy for NonBlank<P> {
    fn covers(&self, certified: &str, aircraft: &str) -> bool {
        let (certified, aircraft) = (certified.trim(), aircraft.trim());
        !certified.is_empty() && !aircraft.is_empty() && self.0.covers(certified, aircraft)
    }
}

/// Certification check used by the roster session and candidate filter.
pub fn is_compatible<S: AsRef<str>>(certified: &[S], aircraft: &str) -> bool {
    LooseSubstring.is_compatible(certified, aircraft)
}
