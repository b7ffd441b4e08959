//! Air mission lifecycle state machine
//!
//! A mission is created READY, launches and flies out, strikes its
//! target, flies home and lands. Movement and payload side effects are
//! delegated through [`MissionExecutor`]; the machine itself only
//! decides which state comes next.

use serde::{Deserialize, Serialize};

/// Lifecycle state of an air mission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirMissionState {
    Ready,
    Launching,
    OutBound,
    InBound,
    Done,
}

/// Actions the turn processor may apply to a mission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionAction {
    Create,
    Execute,
    Recall,
}

/// Side effects and path queries a mission exposes to the state machine
pub trait MissionExecutor {
    /// Take-off side effects, once per mission
    fn launch(&mut self);
    /// Spend this turn's movement budget along the current leg
    fn fly(&mut self);
    /// Attack the target and turn for home
    fn strike(&mut self);
    /// Abort outbound and turn for home early
    fn recall(&mut self);
    /// Landing side effects at the home airbase
    fn land(&mut self);
    fn reached_target(&self) -> bool;
    fn reached_home(&self) -> bool;
}

impl AirMissionState {
    /// Squadron assignment is frozen once the mission is past launch
    pub fn is_assignment_locked(&self) -> bool {
        matches!(self, Self::OutBound | Self::InBound | Self::Done)
    }

    /// Apply one action. Unknown state/action pairs are deliberate
    /// no-ops so callers never need to pre-validate; a mission with a
    /// large movement budget may collapse through several states in a
    /// single Execute.
    pub fn transition(self, action: MissionAction, mission: &mut impl MissionExecutor) -> Self {
        match (self, action) {
            (Self::Ready, MissionAction::Create) => Self::Launching,
            (Self::Launching, MissionAction::Execute) => {
                mission.launch();
                mission.fly();
                resolve_outbound(mission)
            }
            (Self::OutBound, MissionAction::Execute) => {
                mission.fly();
                resolve_outbound(mission)
            }
            (Self::OutBound, MissionAction::Recall) => {
                mission.recall();
                Self::InBound
            }
            (Self::InBound, MissionAction::Execute) => {
                mission.fly();
                if mission.reached_home() {
                    mission.land();
                    Self::Done
                } else {
                    Self::InBound
                }
            }
            // Everything else, including the Done terminal, stays put
            _ => self,
        }
    }
}

/// After flying outbound: strike on arrival, and land in the same turn
/// when the movement budget also covered the trip home.
fn resolve_outbound(mission: &mut impl MissionExecutor) -> AirMissionState {
    if !mission.reached_target() {
        return AirMissionState::OutBound;
    }
    mission.strike();
    if mission.reached_home() {
        mission.land();
        AirMissionState::Done
    } else {
        AirMissionState::InBound
    }
}
