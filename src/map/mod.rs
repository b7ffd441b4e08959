//! Strategic map: staggered-grid geometry, map references, path planning

pub mod grid;
pub mod planner;
pub mod reference;

pub use grid::GridCell;
pub use planner::{plan_path, GridPath};
pub use reference::parse_map_reference;
