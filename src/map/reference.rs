//! Printed-map reference resolution
//!
//! The rulebook addresses cells like "G5": letters are the row (running
//! A..Z then AA, AB, ...), digits are the 1-based column.

use crate::core::error::{GameError, Result};

use super::grid::GridCell;

/// Resolve a printed-map reference to a grid cell.
///
/// A malformed reference is a caller bug at mission-planning time and is
/// surfaced immediately as an error.
pub fn parse_map_reference(reference: &str) -> Result<GridCell> {
    let reference = reference.trim();
    let split = reference
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| GameError::UnresolvableReference(reference.to_string()))?;
    let (letters, digits) = reference.split_at(split);

    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(GameError::UnresolvableReference(reference.to_string()));
    }

    let row = letters
        .chars()
        .fold(0i32, |acc, c| acc * 26 + (c as i32 - 'A' as i32 + 1))
        - 1;

    let col: i32 = digits
        .parse()
        .map_err(|_| GameError::UnresolvableReference(reference.to_string()))?;
    if col < 1 {
        return Err(GameError::UnresolvableReference(reference.to_string()));
    }

    Ok(GridCell::new(row, col - 1))
}
