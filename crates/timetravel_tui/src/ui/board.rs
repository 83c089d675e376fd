//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use timetravel_tictactoe::{CellView, GameView, Player, Position, Square};

use super::ClickMap;
use crate::Command;

/// Board width in terminal cells.
pub const BOARD_WIDTH: u16 = 38;
/// Board height in terminal cells.
pub const BOARD_HEIGHT: u16 = 11;

/// Renders the board, marking `cursor` and the winning line.
///
/// Every cell is recorded in `clicks` as a [`Command::Play`] target.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Option<Position>,
    clicks: &mut ClickMap,
) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, cells) in view.cells.chunks(3).enumerate() {
        render_row(frame, rows[row * 2], cells, cursor, clicks);
        if row < 2 {
            render_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    cells: &[CellView],
    cursor: Option<Position>,
    clicks: &mut ClickMap,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, cell) in cells.iter().enumerate() {
        let cell_area = cols[col * 2];
        render_cell(frame, cell_area, cell, cursor == Some(cell.position));
        clicks.push(cell_area, Command::Play(cell.position));
        if col < 2 {
            render_vertical_sep(frame, cols[col * 2 + 1]);
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, cell: &CellView, under_cursor: bool) {
    let (symbol, mut style) = match cell.square {
        Square::Empty => (
            (cell.position.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if cell.highlighted {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if under_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let text = vec![
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
        Line::from(Span::styled(format!("{symbol:^width$}", width = area.width as usize), style)),
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
