use crate::model::{Candidate, CrewMember, Pilot, Seniority};
use std::ops::RangeInclusive;
use strum_macros::{Display, EnumIter};

/// Number of pilots a roster needs, exactly.
pub const PILOT_COUNT: usize = 2;
/// Allowed count of senior cabin crew, chefs excluded.
pub const CREW_SENIORS: RangeInclusive<usize> = 1..=4;
/// Allowed count of junior cabin crew, chefs excluded.
pub const CREW_JUNIORS: RangeInclusive<usize> = 4..=16;
/// Maximum number of chefs.
pub const MAX_CHEFS: usize = 2;

/// Staffing rules, in the order they are reported.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Hash, EnumIter)]
pub enum Rule {
    PilotCount,
    PilotSeniorityMix,
    CrewSeniors,
    CrewJuniors,
    ChefLimit,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Outcome {
    Passed,
    Failed,
    /// Not evaluated because a rule it depends on failed.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCheck {
    rule: Rule,
    outcome: Outcome,
    message: String,
}

impl RuleCheck {
    fn new(rule: Rule, passed: bool, pass_msg: String, fail_msg: String) -> Self {
        if passed {
            Self { rule, outcome: Outcome::Passed, message: pass_msg }
        } else {
            Self { rule, outcome: Outcome::Failed, message: fail_msg }
        }
    }

    pub fn rule(&self) -> Rule { self.rule }
    pub fn outcome(&self) -> Outcome { self.outcome }
    pub fn passed(&self) -> bool { self.outcome == Outcome::Passed }
    pub fn failed(&self) -> bool { self.outcome == Outcome::Failed }
    pub fn message(&self) -> &str { &self.message }
}

/// Full checklist for one roster; `satisfied` only if no rule failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    satisfied: bool,
    checks: Vec<RuleCheck>,
}

impl ValidationResult {
    pub fn satisfied(&self) -> bool { self.satisfied }
    pub fn checks(&self) -> &[RuleCheck] { &self.checks }

    pub fn check(&self, rule: Rule) -> Option<&RuleCheck> { self.checks.iter().find(|c| c.rule == rule) }

    /// Messages of the failed rules, in rule order.
    pub fn violations(&self) -> impl Iterator<Item = &str> {
        self.checks.iter().filter(|c| c.failed()).map(RuleCheck::message)
    }
}

fn count_seniority<C: Candidate>(people: &[&C], seniority: Seniority) -> usize {
    people.iter().filter(|p| p.seniority() == seniority).count()
}

/// Checks the staffing composition of a roster.
///
/// Every rule is evaluated and reported. The pilot seniority mix is only judged
/// once the pilot count is right, and then on the counts of the whole list.
pub fn validate(pilots: &[Pilot], crew: &[CrewMember]) -> ValidationResult {
    let mut checks = Vec::with_capacity(5);

    let pilot_refs: Vec<&Pilot> = pilots.iter().collect();
    let p_seniors = count_seniority(&pilot_refs, Seniority::Senior);
    let p_juniors = count_seniority(&pilot_refs, Seniority::Junior);
    let count_ok = pilots.len() == PILOT_COUNT;
    checks.push(RuleCheck::new(
        Rule::PilotCount,
        count_ok,
        format!("Pilots: {PILOT_COUNT} assigned"),
        format!("Must have exactly {PILOT_COUNT} Pilots (have {}).", pilots.len()),
    ));
    if count_ok {
        checks.push(RuleCheck::new(
            Rule::PilotSeniorityMix,
            p_seniors >= 1 && p_juniors >= 1,
            String::from("Pilots: OK (1 Sen, 1 Jun)"),
            String::from("Pilots: Need 1 Senior & 1 Junior."),
        ));
    } else {
        checks.push(RuleCheck {
            rule: Rule::PilotSeniorityMix,
            outcome: Outcome::Skipped,
            message: String::from("Pilots: seniority mix not checked until pilot count is met"),
        });
    }

    let cabin: Vec<&CrewMember> = crew.iter().filter(|c| !c.is_chef()).collect();
    let c_seniors = count_seniority(&cabin, Seniority::Senior);
    let c_juniors = count_seniority(&cabin, Seniority::Junior);
    let c_chefs = crew.len() - cabin.len();
    checks.push(RuleCheck::new(
        Rule::CrewSeniors,
        CREW_SENIORS.contains(&c_seniors),
        String::from("Crew Seniors: OK"),
        format!(
            "Crew Seniors: {c_seniors} (Need {}-{})",
            CREW_SENIORS.start(),
            CREW_SENIORS.end()
        ),
    ));
    checks.push(RuleCheck::new(
        Rule::CrewJuniors,
        CREW_JUNIORS.contains(&c_juniors),
        String::from("Crew Juniors: OK"),
        format!(
            "Crew Juniors: {c_juniors} (Need {}-{})",
            CREW_JUNIORS.start(),
            CREW_JUNIORS.end()
        ),
    ));
    checks.push(RuleCheck::new(
        Rule::ChefLimit,
        c_chefs <= MAX_CHEFS,
        format!("Chefs: {c_chefs}"),
        format!("Chefs: {c_chefs} (Max {MAX_CHEFS})"),
    ));

    let satisfied = checks.iter().all(|c| c.passed());
    ValidationResult { satisfied, checks }
}
