//! 1-based column/row coordinates for move descriptions.

use serde::{Deserialize, Serialize};

use crate::Position;

/// Display coordinate of a cell, both components starting at 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("col: {column}, row: {row}")]
pub struct Coordinate {
    /// Column, 1 (left) to 3 (right).
    pub column: u8,
    /// Row, 1 (top) to 3 (bottom).
    pub row: u8,
}

impl From<Position> for Coordinate {
    fn from(pos: Position) -> Self {
        // Both components are below 3, so the casts cannot truncate.
        Self {
            column: pos.column() as u8 + 1,
            row: pos.row() as u8 + 1,
        }
    }
}

/// Maps a move's cell to its display coordinate.
///
/// The initial history entry has no move and so no coordinate.
pub fn coordinate(last_move: Option<Position>) -> Option<Coordinate> {
    last_move.map(Coordinate::from)
}
