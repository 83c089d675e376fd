//! Board snapshots recorded after each move.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

use crate::{Board, Position};

/// One step of the game: the board after a move and the move itself.
///
/// Entries are never mutated; every move produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board snapshot at this step.
    board: Board,
    /// Cell played to reach this step, `None` for the game start.
    last_move: Option<Position>,
}

impl HistoryEntry {
    /// The entry every game starts from: an empty board and no move.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Records `board` as the result of playing at `pos`.
    pub fn after_move(board: Board, pos: Position) -> Self {
        Self {
            board,
            last_move: Some(pos),
        }
    }
}
