//! Keyboard translation and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use timetravel_tictactoe::Position;

use crate::Command;

/// Arrow direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 1 / the top of the list.
    Up,
    /// Towards row 3 / the bottom of the list.
    Down,
    /// Towards column 1.
    Left,
    /// Towards column 3.
    Right,
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.column());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a key press to a command, if the key is bound.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('o') | KeyCode::Char('O') => {
            Command::ToggleOrder
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Command::Play(Position::from_index(index)?)
        }
        KeyCode::Up => Command::MoveCursor(Direction::Up),
        KeyCode::Down => Command::MoveCursor(Direction::Down),
        KeyCode::Left => Command::MoveCursor(Direction::Left),
        KeyCode::Right => Command::MoveCursor(Direction::Right),
        KeyCode::Tab | KeyCode::BackTab => Command::SwitchFocus,
        KeyCode::Enter | KeyCode::Char(' ') => Command::Activate,
        KeyCode::Home => Command::JumpTo(0),
        KeyCode::End => Command::JumpToLatest,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Option<Command> {
        command_for_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Right), Position::BottomRight);
    }

    #[test]
    fn test_digit_keys_play_cells() {
        assert_eq!(press(KeyCode::Char('1')), Some(Command::Play(Position::TopLeft)));
        assert_eq!(press(KeyCode::Char('9')), Some(Command::Play(Position::BottomRight)));
        assert_eq!(press(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(press(KeyCode::Char('q')), Some(Command::Quit));
        assert_eq!(press(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(press(KeyCode::Char('s')), Some(Command::ToggleOrder));
        assert_eq!(press(KeyCode::Home), Some(Command::JumpTo(0)));
        assert_eq!(press(KeyCode::End), Some(Command::JumpToLatest));
        assert_eq!(press(KeyCode::Tab), Some(Command::SwitchFocus));
        assert_eq!(press(KeyCode::Enter), Some(Command::Activate));
        assert_eq!(press(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(key), Some(Command::Quit));
    }
}
