use super::{
    AddError, Affordance, CandidateDirectory, CertificationPolicy, ExactMatch, LooseSubstring, ManifestRole,
    NonBlank, Outcome, Permission, RosterEdits, RosterSession, RosterStatus, Rule, SaveError, build_manifest, filter_candidates,
    is_compatible, validate,
};
use crate::model::{Airport, Candidate, CrewMember, CrewRole, Flight, Passenger, Pilot, Roster, Seniority, VehicleType};
use crate::seating::{SeatClass, SeatingPlan};
use chrono::NaiveDate;
use itertools::Itertools;
use strum::IntoEnumIterator;

const B738: &str = "Boeing 737-800";

fn pilot(id: u64, seniority: Seniority) -> Pilot { Pilot::new(id, &format!("Pilot {id}"), seniority, B738) }

fn crew(id: u64, role: CrewRole, seniority: Seniority) -> CrewMember {
    CrewMember::new(id, &format!("Crew {id}"), role, seniority, &[B738])
}

fn regular_crew(seniors: u64, juniors: u64) -> Vec<CrewMember> {
    (0..seniors)
        .map(|i| crew(100 + i, CrewRole::Regular, Seniority::Senior))
        .chain((0..juniors).map(|i| crew(200 + i, CrewRole::Regular, Seniority::Junior)))
        .collect()
}

fn flight(model: &str) -> Flight {
    let when = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
    let plan = SeatingPlan::builtin(model).unwrap_or_default();
    Flight::new("tk 1001", Airport::from_code("IST"), Airport::from_code("LHR"), when, 2488, VehicleType::new(model, plan, "Standard Menu"))
}

fn directory() -> CandidateDirectory {
    let mut crew_list = regular_crew(3, 6);
    crew_list.push(crew(300, CrewRole::Chef, Seniority::Senior));
    crew_list.push(CrewMember::new(400, "Airbus Only", CrewRole::Regular, Seniority::Junior, &["Airbus A320"]));
    CandidateDirectory::new(
        vec![pilot(1, Seniority::Senior), pilot(2, Seniority::Junior), pilot(3, Seniority::Senior)],
        crew_list,
    )
}

fn session(permission: Permission) -> RosterSession {
    RosterSession::new(Roster::draft(flight(B738)), RosterStatus::Draft, directory(), permission)
}

#[test]
fn test_compatibility_examples() {
    assert!(is_compatible(&["Boeing 737-800"], "Boeing 737-800"));
    assert!(is_compatible(&["E195"], "Embraer E195"));
    assert!(is_compatible(&["embraer e195 (all variants)"], "Embraer E195"));
    assert!(!is_compatible(&["Airbus A320"], "Boeing 737-800"));
    assert!(!is_compatible::<&str>(&[], "Boeing 737-800"));
    // accepted false positive of the loose policy
    assert!(is_compatible(&["737"], "Boeing 737-900"));
}

#[test]
fn test_empty_strings_match_as_substrings() {
    assert!(is_compatible(&[""], "Boeing 737-800"));
    assert!(is_compatible(&["Boeing 737-800"], ""));
    assert!(is_compatible(&["Airbus A320", ""], "Embraer E195"));
    // no trimming: padded entries only match where the padding fits
    assert!(!is_compatible(&[" E195 "], "Embraer E195"));
}

#[test]
fn test_non_blank_policy_skips_blank_entries() {
    let policy = NonBlank(LooseSubstring);
    assert!(!policy.is_compatible(&["", "  "], "Boeing 737-800"));
    assert!(!policy.is_compatible(&["Boeing 737-800"], " "));
    assert!(policy.is_compatible(&["", " e195 "], "Embraer E195"));
}

#[test]
fn test_exact_policy_is_stricter() {
    assert!(ExactMatch.is_compatible(&["boeing 737-800"], "Boeing 737-800"));
    assert!(!ExactMatch.is_compatible(&["E195"], "Embraer E195"));
}

#[test]
fn test_valid_roster() {
    let result = validate(&[pilot(1, Seniority::Senior), pilot(2, Seniority::Junior)], &regular_crew(2, 5));
    assert!(result.satisfied());
    assert_eq!(result.violations().count(), 0);
    assert_eq!(result.checks().len(), Rule::iter().count());
    assert!(Rule::iter().zip(result.checks()).all(|(rule, check)| check.rule() == rule));
}

#[test]
fn test_single_pilot() {
    let result = validate(&[pilot(1, Seniority::Senior)], &regular_crew(2, 5));
    assert!(!result.satisfied());
    assert!(result.check(Rule::PilotCount).unwrap().failed());
    assert_eq!(result.check(Rule::PilotSeniorityMix).unwrap().outcome(), Outcome::Skipped);
    assert!(result.violations().next().unwrap().contains("exactly 2 Pilots"));
}

#[test]
fn test_two_senior_pilots() {
    let result = validate(&[pilot(1, Seniority::Senior), pilot(3, Seniority::Senior)], &regular_crew(2, 5));
    assert!(!result.satisfied());
    assert!(result.check(Rule::PilotCount).unwrap().passed());
    assert!(result.check(Rule::PilotSeniorityMix).unwrap().failed());
}

#[test]
fn test_three_chefs() {
    let mut crew_list = regular_crew(2, 5);
    crew_list.extend((0..3).map(|i| crew(300 + i, CrewRole::Chef, Seniority::Senior)));
    let result = validate(&[pilot(1, Seniority::Senior), pilot(2, Seniority::Junior)], &crew_list);
    assert!(!result.satisfied());
    assert_eq!(result.violations().collect::<Vec<_>>(), ["Chefs: 3 (Max 2)"]);
    for check in result.checks().iter().filter(|c| c.rule() != Rule::ChefLimit) {
        assert!(check.passed(), "{:?}", check.rule());
    }
}

#[test]
fn test_crew_range_bounds() {
    let pilots = [pilot(1, Seniority::Senior), pilot(2, Seniority::Junior)];
    assert!(validate(&pilots, &regular_crew(1, 4)).satisfied());
    assert!(validate(&pilots, &regular_crew(4, 16)).satisfied());
    let low = validate(&pilots, &regular_crew(0, 3));
    assert!(low.check(Rule::CrewSeniors).unwrap().failed());
    assert!(low.check(Rule::CrewJuniors).unwrap().failed());
    let high = validate(&pilots, &regular_crew(5, 17));
    assert_eq!(high.violations().count(), 2);
}

#[test]
fn test_chefs_do_not_count_as_cabin_seniority() {
    let pilots = [pilot(1, Seniority::Senior), pilot(2, Seniority::Junior)];
    let mut crew_list = regular_crew(0, 5);
    crew_list.push(crew(300, CrewRole::Chef, Seniority::Senior));
    let result = validate(&pilots, &crew_list);
    assert!(result.check(Rule::CrewSeniors).unwrap().failed());
    assert!(result.check(Rule::ChefLimit).unwrap().passed());
}

#[test]
fn test_filter_excludes_selected_for_any_order() {
    let dir = directory();
    let selected: Vec<CrewMember> = dir.crew().iter().take(3).cloned().collect();
    for order in selected.iter().cloned().permutations(selected.len()) {
        let views = filter_candidates(dir.crew(), &order, B738, Permission::Edit);
        assert_eq!(views.len(), dir.crew().len() - selected.len());
        assert!(views.iter().all(|v| !selected.iter().any(|s| s.id() == v.candidate().id())));
    }
}

#[test]
fn test_filter_flags_uncertified() {
    let dir = directory();
    let views = filter_candidates(dir.crew(), &[], B738, Permission::Edit);
    let blocked: Vec<_> = views.iter().filter(|v| !v.is_addable()).collect();
    assert_eq!(blocked.len(), 1);
    assert_eq!(blocked[0].candidate().id(), 400);
    match blocked[0].affordance() {
        Affordance::Blocked { reason } => {
            assert!(reason.contains(B738));
            assert!(reason.contains("Airbus A320"));
        }
        other => panic!("unexpected affordance {other:?}"),
    }
}

#[test]
fn test_filter_read_only() {
    let dir = directory();
    let views = filter_candidates(dir.pilots(), &[], B738, Permission::ReadOnly);
    assert!(views.iter().all(|v| *v.affordance() == Affordance::ReadOnly));
}

#[test]
fn test_session_builds_valid_roster() {
    let mut s = session(Permission::Edit);
    assert_eq!(s.title(), "tk 1001 - Roster Details (Draft)");
    assert!(!s.validation().satisfied());
    s.add_pilot(1).unwrap();
    s.add_pilot(2).unwrap();
    for id in [100, 101, 200, 201, 202, 203] {
        s.add_crew(id).unwrap();
    }
    assert!(s.validation().satisfied());
    assert!(s.can_save());
    assert_eq!(s.pilot_candidates().len(), 1);

    s.remove_crew(203).unwrap();
    assert!(!s.validation().satisfied());
    assert!(matches!(s.save_payload(), Err(SaveError::RosterInvalid(v)) if v.len() == 1));
    s.add_crew(203).unwrap();

    let payload = s.save_payload().unwrap();
    assert_eq!(payload.flight_id(), "TK1001");
    assert_eq!(payload.flight().flight_number(), "TK1001");
    assert_eq!(payload.pilots().len(), 2);
}

#[test]
fn test_session_rejects_bad_additions() {
    let mut s = session(Permission::Edit);
    assert_eq!(s.add_crew(999), Err(AddError::UnknownCandidate(999)));
    s.add_crew(100).unwrap();
    assert_eq!(s.add_crew(100), Err(AddError::AlreadySelected(100)));
    assert!(matches!(s.add_crew(400), Err(AddError::NotCertified(_))));
    assert_eq!(s.roster().cabin_crew().len(), 1);
}

#[test]
fn test_session_read_only() {
    let mut s = session(Permission::for_user(Some("crew-planner")));
    assert_eq!(s.add_pilot(1), Err(AddError::ReadOnly));
    assert_eq!(s.remove_pilot(1), Err(AddError::ReadOnly));
    assert!(matches!(s.save_payload(), Err(SaveError::ReadOnly)));
    assert!(Permission::for_user(Some("admin")).can_edit());
    assert!(!Permission::for_user(None).can_edit());
}

#[test]
fn test_unknown_aircraft_blocks_everyone() {
    let roster = Roster::draft(flight("Concorde"));
    let mut s = RosterSession::new(roster, RosterStatus::Draft, directory(), Permission::Edit);
    assert!(s.seat_map().is_empty());
    assert!(s.crew_candidates().iter().all(|v| !v.is_addable()));
    assert!(matches!(s.add_pilot(1), Err(AddError::NotCertified(_))));
}

#[test]
fn test_manifest_order_and_fields() {
    let roster = Roster::draft(flight(B738)).with_passengers(vec![
        Passenger::new(9, "Pax", SeatClass::Business, Some("2C")),
        Passenger::new(8, "Lap", SeatClass::Economy, None),
    ]);
    let mut s = RosterSession::new(roster, RosterStatus::Saved, directory(), Permission::Edit);
    s.add_crew(100).unwrap();
    s.add_pilot(1).unwrap();
    let rows = build_manifest(s.roster());
    let roles: Vec<ManifestRole> = rows.iter().map(|r| r.role).collect();
    assert_eq!(roles, [ManifestRole::Pilot, ManifestRole::CabinCrew, ManifestRole::Passenger, ManifestRole::Passenger]);
    assert_eq!(rows[2].rank, "2C");
    assert_eq!(rows[2].info, "BUSINESS");
    assert_eq!(rows[3].rank, "Unassigned");
    assert_eq!(ManifestRole::CabinCrew.to_string(), "Cabin Crew");
    assert_eq!(s.seat_map().occupied_count(), 1);
    assert_eq!(s.menu_line().unwrap(), "Standard Menu (Pending Chef Selection)");
}

#[test]
fn test_draft_built_through_edits() {
    let mut s = session(Permission::Edit);
    let edits = RosterEdits {
        add_pilots: vec![1, 2],
        add_crew: vec![100, 101, 200, 201, 202, 203],
        ..RosterEdits::default()
    };
    assert!(!edits.is_empty());
    s.apply(&edits).unwrap();
    assert!(s.validation().satisfied());
    assert_eq!(s.save_payload().unwrap().cabin_crew().len(), 6);

    // a swap in one batch: removal runs before the addition
    let swap = RosterEdits { drop_pilots: vec![2], add_pilots: vec![3], ..RosterEdits::default() };
    s.apply(&swap).unwrap();
    assert!(s.roster().has_pilot(3));
    assert!(s.validation().check(Rule::PilotSeniorityMix).unwrap().failed());

    let unknown_drop = RosterEdits { drop_crew: vec![999], ..RosterEdits::default() };
    assert_eq!(s.apply(&unknown_drop), Ok(()));
    assert!(RosterEdits::default().is_empty());
}

#[test]
fn test_edits_stop_at_refused_addition() {
    let mut s = session(Permission::Edit);
    let edits = RosterEdits { add_crew: vec![100, 400, 101], ..RosterEdits::default() };
    assert!(matches!(s.apply(&edits), Err(AddError::NotCertified(_))));
    assert_eq!(s.roster().cabin_crew().len(), 1);

    let mut read_only = session(Permission::ReadOnly);
    let adds = RosterEdits { add_pilots: vec![1], ..RosterEdits::default() };
    assert_eq!(read_only.apply(&adds), Err(AddError::ReadOnly));
}
