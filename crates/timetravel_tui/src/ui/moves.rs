//! Move history list and order toggle.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use timetravel_tictactoe::{GameView, MoveItem};

use super::ClickMap;
use crate::Command;

/// Renders the move list, one clickable row per history step.
///
/// The selected step is bold and prefixed with `>`. `cursor` is the step
/// under the keyboard cursor when the list has focus. The list scrolls so
/// the cursor (or else the selected step) stays visible.
pub fn render_moves(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Option<usize>,
    clicks: &mut ClickMap,
) {
    let order = if view.order_ascending {
        "ascending"
    } else {
        "descending"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Moves ({order})"));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = inner.height as usize;
    if rows == 0 {
        return;
    }
    let anchor = cursor
        .and_then(|step| view.moves.iter().position(|m| m.step == step))
        .or_else(|| view.moves.iter().position(|m| m.selected))
        .unwrap_or(0);
    let offset = (anchor + 1).saturating_sub(rows);

    let visible = view.moves.iter().skip(offset).take(rows);
    for (row, item) in visible.enumerate() {
        let row_area = Rect {
            x: inner.x,
            y: inner.y + row as u16,
            width: inner.width,
            height: 1,
        };
        let line = move_line(item, cursor == Some(item.step));
        frame.render_widget(Paragraph::new(line), row_area);
        clicks.push(row_area, Command::JumpTo(item.step));
    }
}

fn move_line(item: &MoveItem, under_cursor: bool) -> Line<'static> {
    let mut style = Style::default();
    if item.selected {
        style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let marker = if item.selected { "> " } else { "  " };
    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(item.label.clone(), style),
    ])
}

/// Renders the "Switch Order" button.
pub fn render_order_toggle(frame: &mut Frame, area: Rect, clicks: &mut ClickMap) {
    let button = Paragraph::new("Switch Order")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
    clicks.push(area, Command::ToggleOrder);
}
