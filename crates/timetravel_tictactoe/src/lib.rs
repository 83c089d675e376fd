//! Tic-tac-toe with a time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: win detection over the eight fixed lines ([`check_winner`])
//! - **Coordinates**: 1-based column/row labels for moves ([`coordinate`])
//! - **Controller**: history, selected step, turn, and list order ([`GameController`])
//! - **View**: render-ready snapshot derived from the controller ([`GameView`])
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameController, Position, Status, Player};
//!
//! let mut game = GameController::new();
//! game.apply_move(Position::Center);
//! game.apply_move(Position::TopLeft);
//! assert_eq!(game.status(), Status::NextPlayer(Player::X));
//!
//! // Travel back and branch the timeline.
//! game.jump_to(1).unwrap();
//! game.apply_move(Position::BottomRight);
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod coordinate;
mod error;
mod history;
mod position;
pub mod rules;
mod types;
mod view;

pub use controller::{
    FULL_BOARD_STEP, GameController, GamePhase, IgnoreReason, MoveOutcome, Status,
};
pub use coordinate::{Coordinate, coordinate};
pub use error::GameError;
pub use history::HistoryEntry;
pub use position::Position;
pub use rules::{WinningLine, check_winner};
pub use types::{Board, Player, Square};
pub use view::{CellView, GameView, MoveItem, move_label};
