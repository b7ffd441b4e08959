//! Patrols: radius coverage and detection odds

pub mod search;

pub use search::{PatrolGroup, PatrolMember, SearchKind};
