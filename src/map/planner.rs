//! Straight-line path planning on the staggered grid
//!
//! Flights travel the rendered straight line between two cells. The
//! planner samples that line at one-cell intervals for coarse waypoints,
//! then densifies each waypoint gap into single adjacent steps so the
//! final path never jumps more than one cell on either axis.

use serde::{Deserialize, Serialize};

use crate::core::config::GRID_CELL_SIZE;

use super::grid::GridCell;

/// An ordered, adjacency-valid sequence of cells from origin to destination
///
/// Built once at planning time. Consecutive cells are always adjacent and
/// never repeat; the origin is always the first element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPath {
    cells: Vec<GridCell>,
}

impl GridPath {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn first(&self) -> GridCell {
        self.cells[0]
    }

    pub fn last(&self) -> GridCell {
        self.cells[self.cells.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<GridCell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// The same route flown the other way
    pub fn reversed(&self) -> GridPath {
        let mut cells = self.cells.clone();
        cells.reverse();
        GridPath { cells }
    }

    /// The leg from `cells[end]` back to the start, flown in reverse
    pub fn reversed_prefix(&self, end: usize) -> GridPath {
        let mut cells = self.cells[..=end].to_vec();
        cells.reverse();
        GridPath { cells }
    }
}

/// Plan the flight path between two cells along the rendered straight line.
///
/// A degenerate origin == destination plan yields a single-cell path.
pub fn plan_path(origin: GridCell, destination: GridCell) -> GridPath {
    let waypoints = sample_waypoints(origin, destination);

    let mut cells = vec![origin];
    for pair in waypoints.windows(2) {
        densify(pair[0], pair[1], &mut cells);
    }
    GridPath { cells }
}

/// Coarse waypoints: the straight line between the two cell centers,
/// sampled every grid-cell width of horizontal travel. Waypoints are not
/// pairwise adjacent when the line is steep.
fn sample_waypoints(origin: GridCell, destination: GridCell) -> Vec<GridCell> {
    let (x0, y0) = origin.center();
    let (x1, y1) = destination.center();
    let intervals = ((x1 - x0).abs() / GRID_CELL_SIZE).round() as i32;

    let mut waypoints = vec![origin];
    for i in 1..=intervals {
        let t = i as f64 / intervals as f64;
        let cell = GridCell::at_point(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t);
        if waypoints.last() != Some(&cell) {
            waypoints.push(cell);
        }
    }
    if waypoints.last() != Some(&destination) {
        waypoints.push(destination);
    }
    waypoints
}

/// Fill the gap between two waypoints with single adjacent steps: one
/// column at a time, then row-by-row in the destination column.
///
/// Stepping into the next column picks the row that is visually adjacent
/// on the staggered layout, which depends on the parity of the column
/// being left: odd columns sit half a cell lower, so descending from an
/// odd column drops a row immediately while descending from an even one
/// does not (and symmetrically when climbing).
fn densify(from: GridCell, to: GridCell, out: &mut Vec<GridCell>) {
    let mut cursor = from;

    while cursor.col != to.col {
        let row_step = if to.row > cursor.row {
            if cursor.col.rem_euclid(2) == 1 {
                1
            } else {
                0
            }
        } else if to.row < cursor.row {
            if cursor.col.rem_euclid(2) == 0 {
                -1
            } else {
                0
            }
        } else {
            0
        };
        cursor = GridCell::new(
            cursor.row + row_step,
            cursor.col + (to.col - cursor.col).signum(),
        );
        out.push(cursor);
    }

    while cursor.row != to.row {
        cursor = GridCell::new(cursor.row + (to.row - cursor.row).signum(), cursor.col);
        out.push(cursor);
    }
}
