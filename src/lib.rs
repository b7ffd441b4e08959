//! Flattop - turn-based naval/air wargame simulation core

pub mod core;
pub mod map;
pub mod mission;
pub mod patrol;
pub mod squadron;
