//! Patrol search/intercept odds from squadron radius coverage
//!
//! Every squadron whose effective radius covers the target range rolls
//! one detection die; the patrol succeeds on any hit. The odds are
//! queried on demand for reporting and consumed by combat resolution.

use serde::{Deserialize, Serialize};

use crate::core::config::{
    SearchConditions, DROP_TANK_RADIUS_BONUS, RADAR_SEARCH_HIT, VISUAL_SEARCH_HIT,
};
use crate::core::dice;
use crate::core::types::SquadronId;

/// What the patrol is rolling for; selects the per-die probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchKind {
    Visual,
    Radar,
}

impl SearchKind {
    pub fn per_die_probability(&self) -> f64 {
        match self {
            Self::Visual => VISUAL_SEARCH_HIT,
            Self::Radar => RADAR_SEARCH_HIT,
        }
    }
}

/// One squadron's contribution to a patrol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatrolMember {
    pub squadron: SquadronId,
    /// Declared maximum search radius in cells
    pub radius: u32,
    pub drop_tanks: bool,
}

impl PatrolMember {
    pub fn new(squadron: SquadronId, radius: u32) -> Self {
        Self {
            squadron,
            radius,
            drop_tanks: false,
        }
    }

    pub fn with_drop_tanks(mut self) -> Self {
        self.drop_tanks = true;
        self
    }

    /// Declared radius after drop-tank extension and weather reduction
    pub fn effective_radius(&self, conditions: &SearchConditions) -> u32 {
        let extended = if self.drop_tanks {
            self.radius + DROP_TANK_RADIUS_BONUS
        } else {
            self.radius
        };
        extended.saturating_sub(conditions.weather_penalty)
    }
}

/// The squadrons flying one patrol; read by the probability queries,
/// never mutated by them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatrolGroup {
    pub members: Vec<PatrolMember>,
}

impl PatrolGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, member: PatrolMember) {
        self.members.push(member);
    }

    /// Best effective radius any member reaches under the given conditions
    pub fn true_max_radius(&self, conditions: &SearchConditions) -> u32 {
        self.members
            .iter()
            .map(|m| m.effective_radius(conditions))
            .max()
            .unwrap_or(0)
    }

    /// Percentage chance the patrol detects a contact at `target_radius`.
    /// Zero when no member's effective radius covers the range.
    pub fn success_rate(
        &self,
        target_radius: u32,
        conditions: &SearchConditions,
        kind: SearchKind,
    ) -> u32 {
        let qualifying = self
            .members
            .iter()
            .filter(|m| m.effective_radius(conditions) >= target_radius)
            .count() as u32;
        if qualifying == 0 {
            return 0;
        }
        dice::percent_at_least(qualifying, 1, kind.per_die_probability())
    }
}
