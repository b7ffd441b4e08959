//! Air missions: path tracking, lifecycle state machine, mission entity

pub mod flight;
pub mod state;
pub mod tracker;

pub use flight::{AirMission, MissionEvent, MissionKind};
pub use state::{AirMissionState, MissionAction, MissionExecutor};
pub use tracker::{Leg, MissionPathTracker};
