//! Air mission entity: a squadron group flying from base to target and back
//!
//! `AirMission` owns the path tracker and lifecycle state, implements the
//! executor side effects, and reports what happened each turn through a
//! drained event log. Squadron-state changes are driven from those events
//! by the turn processor, never the other way around.

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{MissionId, SquadronId};
use crate::map::grid::GridCell;
use crate::map::planner::{plan_path, GridPath};

use super::state::{AirMissionState, MissionAction, MissionExecutor};
use super::tracker::MissionPathTracker;

/// Mission kind tag; opaque to movement and lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionKind {
    AirStrike,
    Sweep,
    Ferry,
}

/// What a mission did during a turn, for the turn processor to react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissionEvent {
    Launched { from: GridCell },
    TargetStruck { target: GridCell },
    Recalled { at: GridCell },
    Landed { at: GridCell },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirMission {
    pub id: MissionId,
    pub kind: MissionKind,
    pub home: GridCell,
    pub target: GridCell,
    pub squadrons: Vec<SquadronId>,
    state: AirMissionState,
    tracker: MissionPathTracker,
    turn_budget: u32,
    #[serde(skip)]
    events: Vec<MissionEvent>,
}

impl AirMission {
    /// Plan a mission from `home` to `target`; the outbound path is built
    /// once here and owned by the tracker from then on.
    pub fn new(
        id: MissionId,
        kind: MissionKind,
        home: GridCell,
        target: GridCell,
        squadrons: Vec<SquadronId>,
    ) -> Self {
        let path = plan_path(home, target);
        Self {
            id,
            kind,
            home,
            target,
            squadrons,
            state: AirMissionState::Ready,
            tracker: MissionPathTracker::start(path),
            turn_budget: 0,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> AirMissionState {
        self.state
    }

    pub fn position(&self) -> GridCell {
        self.tracker.current_cell()
    }

    /// Current flight path, read-only (rendering, range checks)
    pub fn flight_path(&self) -> &GridPath {
        self.tracker.path()
    }

    /// Add a squadron while assignment is still editable. Returns false
    /// once the mission is airborne past launch.
    pub fn assign_squadron(&mut self, squadron: SquadronId) -> bool {
        if self.state.is_assignment_locked() {
            return false;
        }
        self.squadrons.push(squadron);
        true
    }

    /// Queue the mission for take-off this turn
    pub fn order_launch(&mut self) -> AirMissionState {
        self.apply(MissionAction::Create)
    }

    /// Order the mission home early. A no-op unless outbound.
    pub fn order_recall(&mut self) -> AirMissionState {
        self.apply(MissionAction::Recall)
    }

    /// Run this mission's share of one game turn
    pub fn advance_one_turn(&mut self, movement_budget: u32) -> AirMissionState {
        self.turn_budget = movement_budget;
        self.apply(MissionAction::Execute)
    }

    fn apply(&mut self, action: MissionAction) -> AirMissionState {
        let state = self.state;
        let next = state.transition(action, self);
        self.state = next;
        next
    }

    /// Drain the events accumulated since the last call
    pub fn drain_events(&mut self) -> Vec<MissionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Snapshot for the surrounding application's save layer
    pub fn to_save(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild a mission from a snapshot; resumes identically
    pub fn from_save(raw: &str) -> Result<AirMission> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl MissionExecutor for AirMission {
    fn launch(&mut self) {
        tracing::debug!("mission {:?} launching from {:?}", self.id, self.home);
        self.events.push(MissionEvent::Launched { from: self.home });
    }

    fn fly(&mut self) {
        let budget = std::mem::take(&mut self.turn_budget);
        self.tracker.progress(budget);
    }

    fn strike(&mut self) {
        self.events.push(MissionEvent::TargetStruck {
            target: self.target,
        });
        self.tracker.begin_return();
    }

    fn recall(&mut self) {
        self.events.push(MissionEvent::Recalled {
            at: self.tracker.current_cell(),
        });
        self.tracker.recall();
    }

    fn land(&mut self) {
        tracing::debug!("mission {:?} landed at {:?}", self.id, self.home);
        self.events.push(MissionEvent::Landed { at: self.home });
    }

    fn reached_target(&self) -> bool {
        self.tracker.reached_target()
    }

    fn reached_home(&self) -> bool {
        self.tracker.reached_home()
    }
}
