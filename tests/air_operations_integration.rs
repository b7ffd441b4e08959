//! Air operations integration tests
//!
//! Drives the full turn loop the way the surrounding application does:
//! mission transitions resolve first, then their events drive squadron
//! transitions, and patrol odds are queried on demand for reporting.

use flattop::core::config::SearchConditions;
use flattop::core::types::{MissionId, SquadronId};
use flattop::map::{parse_map_reference, plan_path, GridCell};
use flattop::mission::{AirMission, AirMissionState, MissionEvent, MissionKind};
use flattop::patrol::{PatrolGroup, PatrolMember, SearchKind};
use flattop::squadron::{squadrons_in_state, Squadron, SquadronAction, SquadronState};

fn carrier_air_group() -> Vec<Squadron> {
    vec![
        Squadron::new(SquadronId(1), "VF-2", 7),
        Squadron::new(SquadronId(2), "VB-6", 9),
        Squadron::new(SquadronId(3), "VS-5", 8).with_drop_tanks(),
    ]
}

/// Apply one mission's drained events to the squadron roster. Mission
/// outcomes drive squadron state, never the reverse.
fn react_to_mission(events: &[MissionEvent], mission: &AirMission, roster: &mut [Squadron]) {
    for event in events {
        let action = match event {
            MissionEvent::Launched { .. } => Some(SquadronAction::TakeOff),
            MissionEvent::Landed { .. } => Some(SquadronAction::Land),
            _ => None,
        };
        if let Some(action) = action {
            for squadron in roster
                .iter_mut()
                .filter(|s| mission.squadrons.contains(&s.id))
            {
                squadron.apply(action);
            }
        }
    }
}

#[test]
fn test_strike_mission_drives_squadron_lifecycle() {
    let mut roster = carrier_air_group();
    let home = parse_map_reference("A1").unwrap();
    let target = parse_map_reference("E1").unwrap();

    // Two squadrons fly, one stands ready
    let mut mission = AirMission::new(
        MissionId(1),
        MissionKind::AirStrike,
        home,
        target,
        vec![SquadronId(1), SquadronId(2)],
    );
    for squadron in roster
        .iter_mut()
        .filter(|s| mission.squadrons.contains(&s.id))
    {
        squadron.apply(SquadronAction::AssignToMission);
    }
    assert_eq!(
        squadrons_in_state(&roster, SquadronState::QueuedForMission).len(),
        2
    );

    mission.order_launch();

    // Turn loop: three cells of movement per turn
    let mut turns = 0;
    while mission.state() != AirMissionState::Done {
        mission.advance_one_turn(3);
        let events = mission.drain_events();
        react_to_mission(&events, &mission, &mut roster);
        turns += 1;
        assert!(turns < 10, "mission never completed");
    }

    // Four steps out and four back at three per turn
    assert_eq!(turns, 3);
    assert_eq!(squadrons_in_state(&roster, SquadronState::Hanger).len(), 2);
    assert_eq!(squadrons_in_state(&roster, SquadronState::Ready).len(), 1);

    // Refit returns the flyers to the ready pool
    for squadron in roster.iter_mut() {
        squadron.apply(SquadronAction::Refit);
    }
    assert_eq!(squadrons_in_state(&roster, SquadronState::Ready).len(), 3);
}

#[test]
fn test_recalled_mission_lands_without_striking() {
    let home = GridCell::new(0, 0);
    let target = GridCell::new(6, 0);
    let mut mission = AirMission::new(
        MissionId(2),
        MissionKind::AirStrike,
        home,
        target,
        vec![SquadronId(1)],
    );

    mission.order_launch();
    mission.advance_one_turn(2);
    assert_eq!(mission.state(), AirMissionState::OutBound);

    mission.order_recall();
    assert_eq!(mission.state(), AirMissionState::InBound);

    mission.advance_one_turn(2);
    assert_eq!(mission.state(), AirMissionState::Done);

    let events = mission.drain_events();
    assert!(events
        .iter()
        .all(|e| !matches!(e, MissionEvent::TargetStruck { .. })));
    assert!(matches!(events.last(), Some(MissionEvent::Landed { .. })));
}

#[test]
fn test_patrol_odds_reported_from_roster() {
    let roster = carrier_air_group();
    let mut patrol = PatrolGroup::new();
    for squadron in &roster {
        let mut member = PatrolMember::new(squadron.id, squadron.radius);
        if squadron.drop_tanks {
            member = member.with_drop_tanks();
        }
        patrol.add(member);
    }

    let clear = SearchConditions::clear_skies();
    assert_eq!(patrol.true_max_radius(&clear), 10);

    // All three cover radius 7; only the drop-tank scouts reach 10
    assert_eq!(patrol.success_rate(7, &clear, SearchKind::Visual), 70);
    assert_eq!(patrol.success_rate(10, &clear, SearchKind::Visual), 33);
    assert_eq!(patrol.success_rate(11, &clear, SearchKind::Visual), 0);

    // A storm front pulls every radius in
    let storm = SearchConditions::with_weather_penalty(4);
    assert_eq!(patrol.true_max_radius(&storm), 6);
    assert_eq!(patrol.success_rate(7, &storm, SearchKind::Visual), 0);
}

#[test]
fn test_round_trip_covers_twice_the_distance() {
    let origin = parse_map_reference("C2").unwrap();
    let target = parse_map_reference("H2").unwrap();
    let outbound = plan_path(origin, target);
    let steps_out = outbound.len() - 1;
    let steps_back = outbound.reversed().len() - 1;
    assert_eq!(
        steps_out + steps_back,
        2 * origin.distance(&target) as usize
    );
}
