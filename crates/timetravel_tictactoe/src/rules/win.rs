//! Win detection logic for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Player, Position, Square};

/// The eight winning triples, in evaluation order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the player holding it and its three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// Player occupying all three cells.
    pub player: Player,
    /// The triple, in [`LINES`] order.
    pub cells: [Position; 3],
}

impl WinningLine {
    /// Returns true if `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Scans [`LINES`] in order and returns the first triple whose cells are
/// all occupied by the same player, `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|cells| {
        let [a, b, c] = cells;
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some(WinningLine { player, cells })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, cells: &[Position]) -> Board {
        cells
            .iter()
            .fold(Board::new(), |board, pos| board.with_mark(*pos, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let board = board_with(Player::O, &line);
            assert_eq!(
                check_winner(&board),
                Some(WinningLine {
                    player: Player::O,
                    cells: line
                })
            );
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::O)
            .with_mark(Position::TopRight, Player::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row and left column both complete; the row comes first.
        let board = board_with(
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        let line = check_winner(&board).map(|l| l.cells);
        assert_eq!(line, Some(LINES[0]));
    }

    #[test]
    fn test_contains() {
        let line = WinningLine {
            player: Player::X,
            cells: LINES[6],
        };
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopRight));
    }
}
