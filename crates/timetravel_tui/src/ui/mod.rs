//! UI rendering using ratatui.
//!
//! Drawing is a pure function of [`App`] state; the only output besides the
//! frame is the [`ClickMap`] binding screen regions to commands.

mod board;
mod click;
mod moves;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use timetravel_tictactoe::Status;

use crate::app::{App, Focus};

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, render_board};
pub use click::{ClickMap, ClickTarget};
pub use moves::{render_moves, render_order_toggle};

const HELP: &str =
    "Click / 1-9: play | Arrows: move | Tab: focus | Enter: select | S: switch order | Home/End: start/latest | Q: quit";

/// Draws the whole screen and returns the click targets it laid out.
pub fn draw(frame: &mut Frame, app: &App) -> ClickMap {
    let view = app.view();
    let mut clicks = ClickMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Time-Travel Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(20)])
        .split(chunks[1]);

    let board_cursor = (*app.focus() == Focus::Board).then_some(*app.cursor());
    render_board(frame, body[0], &view, board_cursor, &mut clicks);

    let info = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(body[1]);
    let list_cursor = (*app.focus() == Focus::Moves).then_some(*app.list_cursor());
    render_moves(frame, info[0], &view, list_cursor, &mut clicks);
    render_order_toggle(frame, info[1], &mut clicks);

    let status_color = match view.status {
        Status::Winner(_) => Color::Green,
        Status::Draw => Color::Magenta,
        Status::NextPlayer(_) => Color::Yellow,
    };
    let status = Paragraph::new(view.status.to_string())
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    clicks
}
