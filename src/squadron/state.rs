//! Squadron readiness/assignment state machine
//!
//! Each squadron owns one state, independent of every other squadron.
//! The transition function is a pure lookup table: unlisted state/action
//! pairs keep the current state so callers never pre-validate.

use serde::{Deserialize, Serialize};

/// Readiness/assignment state of a squadron
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquadronState {
    Ready,
    QueuedForPatrol,
    QueuedForMission,
    OnPatrol,
    OnMission,
    QueuedForHanger,
    Hanger,
    Destroyed,
    /// Query wildcard only; never carried by a live squadron
    All,
}

/// Assignment lifecycle actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquadronAction {
    AssignToMission,
    AssignToPatrol,
    TakeOff,
    RemoveFromMission,
    RemoveFromPatrol,
    Land,
    Refit,
    ShotDown,
}

impl SquadronState {
    /// Apply an action; `None` always keeps the current state.
    ///
    /// Destroyed is absorbing. Transitioning from the `All` sentinel is
    /// a caller bug and panics.
    pub fn transition(self, action: Option<SquadronAction>) -> SquadronState {
        let Some(action) = action else {
            return self;
        };
        use SquadronAction::*;
        match (self, action) {
            (Self::Ready, AssignToMission) => Self::QueuedForMission,
            (Self::Ready, AssignToPatrol) => Self::QueuedForPatrol,
            (Self::QueuedForMission, TakeOff) => Self::OnMission,
            (Self::QueuedForMission, RemoveFromMission) => Self::Ready,
            (Self::QueuedForPatrol, TakeOff) => Self::OnPatrol,
            (Self::QueuedForPatrol, RemoveFromPatrol) => Self::Ready,
            (Self::OnMission, Land) => Self::Hanger,
            (Self::OnMission, ShotDown) => Self::Destroyed,
            (Self::OnPatrol, RemoveFromPatrol) => Self::QueuedForHanger,
            (Self::OnPatrol, ShotDown) => Self::Destroyed,
            (Self::QueuedForHanger, Land) => Self::Hanger,
            (Self::Hanger, Refit) => Self::Ready,
            (Self::Destroyed, _) => Self::Destroyed,
            (Self::All, _) => panic!("squadron state transition attempted from the All sentinel"),
            _ => self,
        }
    }

    /// Wildcard-aware comparison for roster queries
    pub fn matches(&self, filter: SquadronState) -> bool {
        filter == Self::All || *self == filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SquadronAction::*;
    use SquadronState::*;

    const ALL_ACTIONS: [SquadronAction; 8] = [
        AssignToMission,
        AssignToPatrol,
        TakeOff,
        RemoveFromMission,
        RemoveFromPatrol,
        Land,
        Refit,
        ShotDown,
    ];

    #[test]
    fn test_mission_lifecycle() {
        let state = Ready.transition(Some(AssignToMission));
        assert_eq!(state, QueuedForMission);
        let state = state.transition(Some(TakeOff));
        assert_eq!(state, OnMission);
        let state = state.transition(Some(Land));
        assert_eq!(state, Hanger);
        let state = state.transition(Some(Refit));
        assert_eq!(state, Ready);
    }

    #[test]
    fn test_patrol_lifecycle() {
        let state = Ready.transition(Some(AssignToPatrol));
        assert_eq!(state, QueuedForPatrol);
        let state = state.transition(Some(TakeOff));
        assert_eq!(state, OnPatrol);
        let state = state.transition(Some(RemoveFromPatrol));
        assert_eq!(state, QueuedForHanger);
        let state = state.transition(Some(Land));
        assert_eq!(state, Hanger);
    }

    #[test]
    fn test_queued_assignments_can_back_out() {
        assert_eq!(QueuedForMission.transition(Some(RemoveFromMission)), Ready);
        assert_eq!(QueuedForPatrol.transition(Some(RemoveFromPatrol)), Ready);
    }

    #[test]
    fn test_shot_down_from_the_air() {
        assert_eq!(OnMission.transition(Some(ShotDown)), Destroyed);
        assert_eq!(OnPatrol.transition(Some(ShotDown)), Destroyed);
        // Squadrons on the ground cannot be shot down
        assert_eq!(Ready.transition(Some(ShotDown)), Ready);
        assert_eq!(Hanger.transition(Some(ShotDown)), Hanger);
    }

    #[test]
    fn test_destroyed_is_absorbing() {
        for action in ALL_ACTIONS {
            assert_eq!(Destroyed.transition(Some(action)), Destroyed);
        }
    }

    #[test]
    fn test_none_action_keeps_state() {
        for state in [Ready, OnMission, Hanger, Destroyed] {
            assert_eq!(state.transition(None), state);
        }
    }

    #[test]
    fn test_unlisted_pairs_are_noops() {
        assert_eq!(OnMission.transition(Some(AssignToPatrol)), OnMission);
        assert_eq!(Ready.transition(Some(Land)), Ready);
        assert_eq!(Hanger.transition(Some(TakeOff)), Hanger);
        assert_eq!(QueuedForHanger.transition(Some(Refit)), QueuedForHanger);
    }

    #[test]
    #[should_panic(expected = "All sentinel")]
    fn test_transition_from_sentinel_panics() {
        All.transition(Some(TakeOff));
    }

    #[test]
    fn test_wildcard_matches_everything() {
        assert!(Ready.matches(All));
        assert!(Destroyed.matches(All));
        assert!(OnPatrol.matches(OnPatrol));
        assert!(!OnPatrol.matches(OnMission));
    }
}
