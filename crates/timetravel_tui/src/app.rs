//! Application state and command dispatch.

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use derive_getters::Getters;
use timetravel_tictactoe::{GameController, GameView, MoveOutcome, Position};
use tracing::{debug, instrument, warn};

use crate::input::{Direction, command_for_key, move_cursor};
use crate::ui::ClickMap;
use crate::Command;

/// Pane receiving cursor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move history list.
    Moves,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading events.
    Continue,
    /// Restore the terminal and exit.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    game: GameController,
    focus: Focus,
    /// Board cell under the keyboard cursor.
    cursor: Position,
    /// History step under the keyboard cursor in the move list.
    list_cursor: usize,
    #[getter(skip)]
    click_map: ClickMap,
}

impl App {
    /// Creates an app around a game.
    pub fn new(game: GameController) -> Self {
        let list_cursor = *game.current_step();
        Self {
            game,
            focus: Focus::Board,
            cursor: Position::Center,
            list_cursor,
            click_map: ClickMap::default(),
        }
    }

    /// Current view of the game.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Replaces the click targets recorded by the last draw.
    pub fn set_click_map(&mut self, click_map: ClickMap) {
        self.click_map = click_map;
    }

    /// Translates a terminal event and dispatches the resulting command.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: &Event) -> Flow {
        let command = match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => command_for_key(*key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.click_map.hit(mouse.column, mouse.row)
            }
            _ => None,
        };
        match command {
            Some(command) => self.dispatch(command),
            None => Flow::Continue,
        }
    }

    /// Applies a command to the game or the UI state.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn dispatch(&mut self, command: Command) -> Flow {
        match command {
            Command::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Command::JumpTo(step) => self.jump_to(step),
            Command::JumpToLatest => {
                self.game.jump_to_latest();
                self.list_cursor = *self.game.current_step();
            }
            Command::ToggleOrder => self.game.toggle_order(),
            Command::MoveCursor(direction) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, direction),
                Focus::Moves => self.move_list_cursor(direction),
            },
            Command::SwitchFocus => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus switched");
            }
            Command::Activate => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::Moves => self.jump_to(self.list_cursor),
            },
            Command::Quit => {
                debug!("Quit requested");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn play(&mut self, pos: Position) {
        match self.game.apply_move(pos) {
            MoveOutcome::Applied => self.list_cursor = *self.game.current_step(),
            MoveOutcome::Ignored(reason) => debug!(%reason, "Click ignored"),
        }
    }

    fn jump_to(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(()) => self.list_cursor = step,
            Err(e) => warn!(error = %e, "Jump rejected"),
        }
    }

    /// Moves the list cursor in display order, so "up" follows the screen.
    fn move_list_cursor(&mut self, direction: Direction) {
        let last = self.game.history().len() - 1;
        let towards_newer = match direction {
            Direction::Down => *self.game.order_ascending(),
            Direction::Up => !*self.game.order_ascending(),
            Direction::Left | Direction::Right => return,
        };
        self.list_cursor = if towards_newer {
            (self.list_cursor + 1).min(last)
        } else {
            self.list_cursor.saturating_sub(1)
        };
    }
}
