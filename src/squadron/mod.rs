//! Squadrons and their readiness lifecycle

pub mod state;

pub use state::{SquadronAction, SquadronState};

use serde::{Deserialize, Serialize};

use crate::core::types::SquadronId;

/// A squadron of aircraft operating from an airbase or carrier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Squadron {
    pub id: SquadronId,
    pub name: String,
    /// Declared maximum search radius in cells
    pub radius: u32,
    /// Drop tanks fitted, extending effective radius
    pub drop_tanks: bool,
    state: SquadronState,
}

impl Squadron {
    pub fn new(id: SquadronId, name: &str, radius: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            radius,
            drop_tanks: false,
            state: SquadronState::Ready,
        }
    }

    pub fn with_drop_tanks(mut self) -> Self {
        self.drop_tanks = true;
        self
    }

    pub fn state(&self) -> SquadronState {
        self.state
    }

    /// Apply a lifecycle action through the transition table
    pub fn apply(&mut self, action: SquadronAction) -> SquadronState {
        self.state = self.state.transition(Some(action));
        self.state
    }
}

/// Squadrons in the roster matching a state filter; `All` matches every
/// live squadron
pub fn squadrons_in_state(roster: &[Squadron], filter: SquadronState) -> Vec<&Squadron> {
    roster
        .iter()
        .filter(|s| s.state().matches(filter))
        .collect()
}
