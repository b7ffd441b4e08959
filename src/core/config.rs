//! Ruleset constants and search configuration
//!
//! The probability and geometry numbers here are rule-critical: they must
//! match the printed tabletop values, not tuned for feel.

use serde::{Deserialize, Serialize};

/// Faces on the standard die used for every roll in the ruleset
pub const DIE_FACES: u32 = 6;

/// Rendered size of one map cell in pixels
///
/// Only used by the path planner's slope sampling; the planner walks
/// cell centers in pixel space and converts back to grid coordinates.
pub const GRID_CELL_SIZE: f64 = 40.0;

/// Per-die success chance for a visual search (2 in 6)
pub const VISUAL_SEARCH_HIT: f64 = 1.0 / 3.0;

/// Per-die success chance for a radar-assisted search (3 in 6)
pub const RADAR_SEARCH_HIT: f64 = 0.5;

/// Extra search radius (in cells) from fitting drop tanks
pub const DROP_TANK_RADIUS_BONUS: u32 = 2;

/// Externally supplied modifiers applied to a squadron's declared
/// search radius before the detection roll.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchConditions {
    /// Radius reduction from weather, in cells
    pub weather_penalty: u32,
}

impl SearchConditions {
    pub fn clear_skies() -> Self {
        Self { weather_penalty: 0 }
    }

    pub fn with_weather_penalty(penalty: u32) -> Self {
        Self {
            weather_penalty: penalty,
        }
    }
}
