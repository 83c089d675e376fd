//! Render-ready snapshot of a game.
//!
//! A [`GameView`] is a pure function of [`GameController`] state. Frontends
//! redraw from a fresh view after every operation instead of tracking
//! changes themselves.

use serde::{Deserialize, Serialize};

use crate::{Coordinate, GameController, Position, Square, Status, coordinate};

/// One board cell as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Cell position.
    pub position: Position,
    /// Mark in the cell.
    pub square: Square,
    /// Part of the winning line.
    pub highlighted: bool,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveItem {
    /// History step this item jumps to.
    pub step: usize,
    /// Button text.
    pub label: String,
    /// Coordinate of the move that produced the step.
    pub coordinate: Option<Coordinate>,
    /// The step is the one currently shown.
    pub selected: bool,
}

/// Everything needed to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Cells in row-major order.
    pub cells: [CellView; 9],
    /// Status line.
    pub status: Status,
    /// Move list in display order.
    pub moves: Vec<MoveItem>,
    /// Display order of `moves`.
    pub order_ascending: bool,
}

/// Button text for a history step.
pub fn move_label(step: usize, coordinate: Option<Coordinate>) -> String {
    match coordinate {
        Some(coord) if step > 0 => format!("Go to move #{step}({coord})"),
        _ => "Go to game start".to_string(),
    }
}

impl GameView {
    /// Builds the view for the controller's selected step.
    pub fn of(game: &GameController) -> Self {
        let board = game.board();
        let line = game.winning_line();
        let cells = Position::ALL.map(|position| CellView {
            position,
            square: board.get(position),
            highlighted: line.is_some_and(|l| l.contains(position)),
        });

        let mut moves: Vec<MoveItem> = game
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| {
                let coordinate = coordinate(*entry.last_move());
                MoveItem {
                    step,
                    label: move_label(step, coordinate),
                    coordinate,
                    selected: step == *game.current_step(),
                }
            })
            .collect();
        if !*game.order_ascending() {
            moves.reverse();
        }

        Self {
            cells,
            status: game.status(),
            moves,
            order_ascending: *game.order_ascending(),
        }
    }

    /// The move-list item for the selected step.
    pub fn selected_move(&self) -> Option<&MoveItem> {
        self.moves.iter().find(|item| item.selected)
    }

    /// Plain-text rendering used by headless output.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in self.cells.chunks(3) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| {
                    let mark = match cell.square {
                        Square::Empty => ".".to_string(),
                        Square::Occupied(player) => player.to_string(),
                    };
                    if cell.highlighted {
                        format!("[{mark}]")
                    } else {
                        format!(" {mark} ")
                    }
                })
                .collect();
            out.push_str(&line.join("|"));
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.status.to_string());
        out.push('\n');
        for item in &self.moves {
            let marker = if item.selected { '>' } else { ' ' };
            out.push_str(&format!("{marker} {}. {}\n", item.step, item.label));
        }
        out
    }
}
