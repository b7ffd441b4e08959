//! Core identifier types shared across the simulation

use serde::{Deserialize, Serialize};

/// Unique identifier for an air mission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissionId(pub u32);

/// Unique identifier for a squadron
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SquadronId(pub u32);

/// Game turn counter
pub type Turn = u32;
