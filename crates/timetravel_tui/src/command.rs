//! Messages produced by input and consumed by the app.

use timetravel_tictactoe::Position;

use crate::input::Direction;

/// A user intent, bound to its cell or step when the UI is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the next mark at a cell.
    Play(Position),
    /// Show a recorded history step.
    JumpTo(usize),
    /// Show the most recent history step.
    JumpToLatest,
    /// Flip the move list between ascending and descending.
    ToggleOrder,
    /// Move the cursor of the focused pane.
    MoveCursor(Direction),
    /// Move keyboard focus between the board and the move list.
    SwitchFocus,
    /// Activate whatever the cursor is on.
    Activate,
    /// Leave the game.
    Quit,
}
