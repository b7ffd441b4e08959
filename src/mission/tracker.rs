//! Per-turn movement along a planned mission path
//!
//! The tracker owns the flight path and a position index. The index only
//! ever advances along the current path; turning around (at the target,
//! or on recall) installs a new inbound path and restarts the index at
//! the cell the mission currently occupies.

use serde::{Deserialize, Serialize};

use crate::map::grid::GridCell;
use crate::map::planner::GridPath;

/// Which leg of the round trip the mission is flying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Leg {
    OutBound,
    InBound,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionPathTracker {
    path: GridPath,
    current_index: usize,
    leg: Leg,
    /// Movement left over when a leg ended mid-turn; spent when the leg
    /// flips so a large budget can cover both legs in one turn
    banked: u32,
}

impl MissionPathTracker {
    /// Begin tracking an outbound path from its first cell
    pub fn start(path: GridPath) -> Self {
        Self {
            path,
            current_index: 0,
            leg: Leg::OutBound,
            banked: 0,
        }
    }

    pub fn path(&self) -> &GridPath {
        &self.path
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_cell(&self) -> GridCell {
        self.path.get(self.current_index).unwrap_or_else(|| self.path.last())
    }

    pub fn leg(&self) -> Leg {
        self.leg
    }

    /// Advance up to `distance` cells, clamping at the end of the path.
    /// Movement beyond the clamp is banked for the leg flip.
    pub fn progress(&mut self, distance: u32) {
        let remaining = (self.path.len() - 1 - self.current_index) as u32;
        if distance >= remaining {
            self.current_index = self.path.len() - 1;
            self.banked = distance - remaining;
        } else {
            self.current_index += distance as usize;
            self.banked = 0;
        }
    }

    /// At the far end of the outbound leg
    pub fn reached_target(&self) -> bool {
        self.leg == Leg::OutBound && self.at_path_end()
    }

    /// At the far end of a path that terminates at the home airbase
    pub fn reached_home(&self) -> bool {
        self.leg == Leg::InBound && self.at_path_end()
    }

    fn at_path_end(&self) -> bool {
        self.current_index == self.path.len() - 1
    }

    /// Turn around at the target: fly the same route back, spending any
    /// movement banked from the outbound leg.
    pub fn begin_return(&mut self) {
        self.path = self.path.reversed();
        self.current_index = 0;
        self.leg = Leg::InBound;
        let banked = std::mem::take(&mut self.banked);
        if banked > 0 {
            self.progress(banked);
        }
    }

    /// Abort the outbound leg and head home along the cells already
    /// traveled. The new path starts at the current cell and ends at the
    /// original path's first cell.
    pub fn recall(&mut self) {
        self.path = self.path.reversed_prefix(self.current_index);
        self.current_index = 0;
        self.leg = Leg::InBound;
        self.banked = 0;
    }
}
