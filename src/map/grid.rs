//! Staggered-grid geometry for the strategic map
//!
//! The map is a square lattice whose odd columns sit half a cell lower
//! than even ones, approximating a hex layout. Adjacency is structural
//! (one step on either axis); distance follows the staggered layout.

use serde::{Deserialize, Serialize};

use crate::core::config::GRID_CELL_SIZE;

/// A single (row, column) cell on the staggered grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub row: i32,
    pub col: i32,
}

impl GridCell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Structural adjacency: at most one step apart on both axes
    pub fn is_adjacent(&self, other: &GridCell) -> bool {
        (self.row - other.row).abs() <= 1 && (self.col - other.col).abs() <= 1
    }

    /// Rendered pixel center of this cell
    pub fn center(&self) -> (f64, f64) {
        let x = self.col as f64 * GRID_CELL_SIZE + GRID_CELL_SIZE / 2.0;
        let y = self.row as f64 * GRID_CELL_SIZE + GRID_CELL_SIZE / 2.0 + column_offset(self.col);
        (x, y)
    }

    /// Cell containing a rendered pixel point
    pub fn at_point(x: f64, y: f64) -> GridCell {
        let col = (x / GRID_CELL_SIZE).floor() as i32;
        let row = ((y - column_offset(col)) / GRID_CELL_SIZE).floor() as i32;
        GridCell::new(row, col)
    }

    /// Step distance on the staggered layout
    ///
    /// Converts through cube coordinates (odd columns shoved down) and
    /// applies the standard hex distance formula.
    pub fn distance(&self, other: &GridCell) -> i32 {
        let (x1, y1, z1) = self.to_cube();
        let (x2, y2, z2) = other.to_cube();
        ((x1 - x2).abs() + (y1 - y2).abs() + (z1 - z2).abs()) / 2
    }

    fn to_cube(&self) -> (i32, i32, i32) {
        let x = self.col;
        let z = self.row - (self.col - (self.col & 1)) / 2;
        (x, -x - z, z)
    }
}

/// Vertical offset of a column's cells; odd columns sit half a cell lower
fn column_offset(col: i32) -> f64 {
    if col.rem_euclid(2) == 1 {
        GRID_CELL_SIZE / 2.0
    } else {
        0.0
    }
}
