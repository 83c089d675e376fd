//! Game controller: move history, time travel, and list ordering.
//!
//! [`GameController`] owns all mutable game state. Every operation is a
//! synchronous state transition; the rendered view is derived afresh from
//! the controller afterwards (see [`GameController::view`]).

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::rules::{WinningLine, check_winner};
use crate::{Board, GameError, GameView, HistoryEntry, Player, Position};

/// Number of moves that fills the board.
pub const FULL_BOARD_STEP: usize = 9;

/// Phase of the game at the selected step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moves may still be played.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// All nine moves played without a winner.
    Drawn,
}

/// Status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player has won at the selected step.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// The board is full at the selected step.
    #[display("Draw")]
    Draw,
    /// The game continues with this player.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The selected board already has a winner.
    #[display("game already won by {_0}")]
    AlreadyWon(Player),
    /// The target cell holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(Position),
    /// The raw index does not name a cell.
    #[display("index {_0} is not a board cell")]
    NotACell(usize),
}

/// Result of [`GameController::apply_move`].
///
/// Ignored moves leave the controller untouched; the reason is only
/// informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was recorded as a new history entry.
    Applied,
    /// The move was dropped.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if the move was recorded.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }
}

/// Owner of the game's history and view settings.
///
/// Deserialized controllers are validated step by step and rejected with
/// [`GameError`] if their history could not have been played.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "SavedGame")]
pub struct GameController {
    /// Recorded steps; entry 0 is always the empty start board.
    history: Vec<HistoryEntry>,
    /// Index of the selected step in `history`.
    current_step: usize,
    /// Player to move from the selected step.
    next_player: Player,
    /// Whether the move list is shown oldest first.
    order_ascending: bool,
}

impl GameController {
    /// Creates a controller holding only the game start.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_step: 0,
            next_player: Player::X,
            order_ascending: true,
        }
    }

    /// Creates a controller with the move list in the given order.
    pub fn with_order(order_ascending: bool) -> Self {
        Self {
            order_ascending,
            ..Self::new()
        }
    }

    /// Entry at the selected step.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.current_step]
    }

    /// Board at the selected step.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Completed line on the selected board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        check_winner(self.board())
    }

    /// Plays `next_player`'s mark at `pos` from the selected step.
    ///
    /// Ignored when the selected board already has a winner or the cell is
    /// taken. Otherwise any steps after the selected one are discarded, the
    /// new board is appended and selected, and the turn passes.
    #[instrument(skip(self), fields(position = ?pos, player = %self.next_player, step = self.current_step))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        if let Some(line) = self.winning_line() {
            debug!(winner = %line.player, "Move ignored, game already won");
            return MoveOutcome::Ignored(IgnoreReason::AlreadyWon(line.player));
        }
        if !self.board().is_empty(pos) {
            debug!("Move ignored, square occupied");
            return MoveOutcome::Ignored(IgnoreReason::Occupied(pos));
        }

        let board = self.board().with_mark(pos, self.next_player);
        let discarded = self.history.len() - (self.current_step + 1);
        self.history.truncate(self.current_step + 1);
        self.history.push(HistoryEntry::after_move(board, pos));
        self.current_step = self.history.len() - 1;
        self.next_player = self.next_player.opponent();

        info!(step = self.current_step, discarded, "Move applied");
        MoveOutcome::Applied
    }

    /// Plays at a raw row-major cell index (0-8).
    ///
    /// Indices outside the board are ignored like any other invalid move.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(pos) => self.apply_move(pos),
            None => {
                debug!("Move ignored, index outside board");
                MoveOutcome::Ignored(IgnoreReason::NotACell(index))
            }
        }
    }

    /// Selects a recorded step without altering history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StepOutOfRange`] if `step` is not a recorded
    /// step; the controller is left unchanged.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.history.len() {
            return Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.current_step = step;
        self.next_player = Player::for_step(step);
        info!(step, next_player = %self.next_player, "Jumped to step");
        Ok(())
    }

    /// Selects the last recorded step.
    pub fn jump_to_latest(&mut self) {
        self.current_step = self.history.len() - 1;
        self.next_player = Player::for_step(self.current_step);
        debug!(step = self.current_step, "Jumped to latest step");
    }

    /// Flips the display order of the move list.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.order_ascending = !self.order_ascending;
        debug!(ascending = self.order_ascending, "Toggled move order");
    }

    /// Phase of the game at the selected step.
    ///
    /// A full board is recognised by step count alone. A win on the ninth
    /// move is still reported as won because the winner check runs first.
    pub fn phase(&self) -> GamePhase {
        match self.winning_line() {
            Some(line) => GamePhase::Won(line.player),
            None if self.current_step == FULL_BOARD_STEP => GamePhase::Drawn,
            None => GamePhase::InProgress,
        }
    }

    /// Status line for the selected step.
    pub fn status(&self) -> Status {
        match self.phase() {
            GamePhase::Won(player) => Status::Winner(player),
            GamePhase::Drawn => Status::Draw,
            GamePhase::InProgress => Status::NextPlayer(self.next_player),
        }
    }

    /// Derives the full view of the game from current state.
    pub fn view(&self) -> GameView {
        GameView::of(self)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

/// Controller fields as read from a saved game, before validation.
#[derive(Debug, Deserialize)]
struct SavedGame {
    history: Vec<HistoryEntry>,
    current_step: usize,
    next_player: Player,
    order_ascending: bool,
}

impl TryFrom<SavedGame> for GameController {
    type Error = GameError;

    /// Accepts a saved game only if every step follows from the previous
    /// one by a legal move.
    #[instrument(skip_all, fields(entries = saved.history.len(), step = saved.current_step))]
    fn try_from(saved: SavedGame) -> Result<Self, GameError> {
        let SavedGame {
            history,
            current_step,
            next_player,
            order_ascending,
        } = saved;

        if history.first() != Some(&HistoryEntry::start()) {
            return Err(GameError::InvalidState {
                step: 0,
                reason: "history must open with the empty start board",
            });
        }
        for (idx, pair) in history.windows(2).enumerate() {
            let (prev, entry) = (&pair[0], &pair[1]);
            let step = idx + 1;
            let invalid = |reason| GameError::InvalidState { step, reason };

            if check_winner(prev.board()).is_some() {
                return Err(invalid("move recorded after the game was won"));
            }
            let Some(pos) = *entry.last_move() else {
                return Err(invalid("entry has no move"));
            };
            if !prev.board().is_empty(pos) {
                return Err(invalid("move plays an occupied cell"));
            }
            if *entry.board() != prev.board().with_mark(pos, Player::for_step(idx)) {
                return Err(invalid("board does not follow from the move"));
            }
        }
        if current_step >= history.len() {
            return Err(GameError::StepOutOfRange {
                step: current_step,
                len: history.len(),
            });
        }
        if next_player != Player::for_step(current_step) {
            return Err(GameError::InvalidState {
                step: current_step,
                reason: "next player does not match the selected step",
            });
        }

        debug!("Saved game accepted");
        Ok(Self {
            history,
            current_step,
            next_player,
            order_ascending,
        })
    }
}
