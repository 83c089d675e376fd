//! Screen regions bound to commands at draw time.

use ratatui::layout::{Position as ScreenPosition, Rect};

use crate::Command;

/// A clickable region and the command it issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickTarget {
    /// Region in terminal cells.
    pub area: Rect,
    /// Command dispatched on a left click.
    pub command: Command,
}

/// Click targets recorded during the most recent draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickMap {
    targets: Vec<ClickTarget>,
}

impl ClickMap {
    /// Records a clickable region.
    pub fn push(&mut self, area: Rect, command: Command) {
        self.targets.push(ClickTarget { area, command });
    }

    /// Command under the given terminal cell, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Command> {
        let point = ScreenPosition::new(column, row);
        self.targets
            .iter()
            .find(|target| target.area.contains(point))
            .map(|target| target.command)
    }

    /// All recorded targets in draw order.
    pub fn targets(&self) -> &[ClickTarget] {
        &self.targets
    }
}
